mod http_port;
mod panel_feed;

pub use http_port::{HttpPort, HttpRequest};
pub use panel_feed::PanelFeed;

#[cfg(test)]
pub mod mocks {
    pub use super::http_port::mock::MockHttpPort;
}
