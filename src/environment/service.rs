use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use super::entities::{Comment, Post, PostId};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait ServiceProvider: Send + Sync {
    async fn fetch_posts(&self, page: usize, limit: usize) -> Result<Vec<Post>, TransportError>;
    async fn fetch_comments(&self, post_id: PostId) -> Result<Vec<Comment>, TransportError>;
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Endpoint {
    Posts { page: usize, limit: usize },
    Comments { post_id: PostId },
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Posts { .. } => "posts".to_string(),
            Endpoint::Comments { post_id } => format!("posts/{post_id}/comments"),
        }
    }

    pub fn queries(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::Posts { page, limit } => {
                vec![("_page", page.to_string()), ("_limit", limit.to_string())]
            }
            Endpoint::Comments { .. } => Vec::new(),
        }
    }

    pub fn url(&self, base: &Url) -> Result<Url, TransportError> {
        // `join` replaces the last segment unless the base ends in a slash
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let mut url = base.join(&self.path())?;
        let queries = self.queries();
        if !queries.is_empty() {
            url.query_pairs_mut().extend_pairs(queries);
        }
        Ok(url)
    }
}

#[derive(Clone)]
pub struct LiveService {
    base_url: Url,
    client: reqwest::Client,
}

impl std::fmt::Debug for LiveService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveService")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl LiveService {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, TransportError> {
        let url = endpoint.url(&self.base_url)?;
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }
        let data = response.bytes().await?;
        Ok(serde_json::from_slice(&data)?)
    }
}

#[async_trait]
impl ServiceProvider for LiveService {
    async fn fetch_posts(&self, page: usize, limit: usize) -> Result<Vec<Post>, TransportError> {
        self.fetch(Endpoint::Posts { page, limit }).await
    }

    async fn fetch_comments(&self, post_id: PostId) -> Result<Vec<Comment>, TransportError> {
        self.fetch(Endpoint::Comments { post_id }).await
    }
}
