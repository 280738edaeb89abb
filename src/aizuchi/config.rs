use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Listen on all interfaces instead of loopback only.
    #[serde(default)]
    pub share: bool,

    #[serde(default = "default_serving_port")]
    pub serving_port: u16,

    #[serde(default = "default_static_serving_dir")]
    pub static_serving_dir: PathBuf,
}

fn default_serving_port() -> u16 {
    7860
}

fn default_static_serving_dir() -> PathBuf {
    "ui/dist".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            share: false,
            serving_port: default_serving_port(),
            static_serving_dir: default_static_serving_dir(),
        }
    }
}

impl Config {
    /// `share` from the command line can only widen exposure, never narrow it.
    pub fn serving_addr(&self, share: bool) -> SocketAddr {
        let ip = if share || self.share {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        } else {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        };
        SocketAddr::new(ip, self.serving_port)
    }
}
