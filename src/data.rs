//! Loading the annotated recording document.

use debrief_core::Recording;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Where the page's annotation document lives.
pub const RECORDING_URL: &str = "/assets/recording.json";

async fn fetch_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("No window")?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("fetch {url}: {e:?}"))?;
    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| format!("fetch {url}: not a Response"))?;
    if !resp.ok() {
        return Err(format!("fetch {url}: HTTP {}", resp.status()));
    }
    let text = JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("read body: {e:?}"))?;
    text.as_string().ok_or_else(|| "read body: not a string".to_string())
}

pub async fn load_recording(url: &str) -> Result<Recording, String> {
    let text = fetch_text(url).await?;
    Recording::from_json(&text).map_err(|e| format!("recording parse: {e}"))
}
