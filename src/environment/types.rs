use serde::{Deserialize, Serialize};
use url::Url;

use super::service::DEFAULT_BASE_URL;

pub const DEFAULT_PAGE_LIMIT: usize = 10;

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Number of posts requested per page
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base url is valid")
}

fn default_page_limit() -> usize {
    DEFAULT_PAGE_LIMIT
}
