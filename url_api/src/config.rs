use serde::Deserialize;
use std::net::SocketAddr;
use std::num::NonZeroUsize;

const DEFAULT_ALIAS_LENGTH: NonZeroUsize = NonZeroUsize::new(6).unwrap();

/// Service configuration, read from the environment by `us_app::load_config`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding the alias records. Without it the service
    /// falls back to an in-memory store.
    #[serde(default)]
    pub urls_table: Option<String>,

    /// Length of generated aliases. Zero is rejected at load time.
    #[serde(default = "default_alias_length")]
    pub alias_length: NonZeroUsize,

    /// Address the development server listens on.
    #[serde(default = "default_listen_address")]
    pub listen_address: SocketAddr,
}

const fn default_alias_length() -> NonZeroUsize {
    DEFAULT_ALIAS_LENGTH
}

fn default_listen_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3030))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls_table: None,
            alias_length: default_alias_length(),
            listen_address: default_listen_address(),
        }
    }
}
