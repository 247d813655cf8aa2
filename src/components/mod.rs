pub mod app;
pub mod behavior_nav;
pub mod player_bar;
pub mod share_popover;
pub mod transcript;
pub mod visualization;
