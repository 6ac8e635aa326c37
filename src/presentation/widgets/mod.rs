mod footer_bar;
mod nav_bar;
mod status_bar;

pub use footer_bar::{FOOTER_TEXT, FooterBar, FooterBarStyle};
pub use nav_bar::{NavBar, NavBarStyle};
pub use status_bar::{StatusBar, StatusLevel};
