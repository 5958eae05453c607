pub mod debug;
pub mod html;
pub mod status_bar;
pub mod stories;
