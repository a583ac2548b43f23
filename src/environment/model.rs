use std::sync::Arc;

use url::Url;

pub use super::entities::{Comment, Post, PostId};
use super::service::{LiveService, ServiceProvider};

/// What the reducers talk to. Cheap to clone, all clones share one client.
#[derive(Clone)]
pub struct Model {
    url: String,
    client: Arc<dyn ServiceProvider>,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model").field("url", &self.url).finish()
    }
}

impl Model {
    pub fn new(url: Url) -> Self {
        let client = LiveService::new(url.clone());
        Self {
            url: url.to_string(),
            client: Arc::new(client),
        }
    }

    pub fn with_provider(url: impl Into<String>, client: Arc<dyn ServiceProvider>) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    pub async fn posts(&self, page: usize, limit: usize) -> Result<Vec<Post>, String> {
        log::trace!("Posts {page} {limit}");
        let posts = self
            .client
            .fetch_posts(page, limit)
            .await
            .string_error("posts")?;
        log::trace!("posts arrived {}", posts.len());
        Ok(posts)
    }

    pub async fn comments(&self, post_id: PostId) -> Result<Vec<Comment>, String> {
        log::trace!("Comments {post_id}");
        self.client
            .fetch_comments(post_id)
            .await
            .string_error("comments")
    }
}

trait ResultExt {
    type Output;
    fn string_error(self, call: &'static str) -> Result<Self::Output, String>;
}

impl<T, E: std::fmt::Display> ResultExt for Result<T, E> {
    type Output = T;
    fn string_error(self, call: &'static str) -> Result<T, String> {
        self.map_err(|e| {
            let string_error = format!("API Error: {call} {e}");
            log::error!("{string_error}");
            string_error
        })
    }
}

#[cfg(test)]
pub mod testing {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use tokio::sync::Semaphore;

    use super::*;
    use crate::environment::service::TransportError;

    pub fn post(id: PostId) -> Post {
        Post {
            user_id: 1,
            id,
            title: format!("title {id}"),
            body: format!("body {id}"),
        }
    }

    pub fn comment(post_id: PostId, id: u64) -> Comment {
        Comment {
            post_id,
            id,
            name: format!("name {id}"),
            email: format!("user{id}@example.com"),
            body: format!("comment {id}"),
        }
    }

    /// A scripted service. Pages that are not scripted come back empty.
    #[derive(Default)]
    pub struct MockService {
        pub pages: HashMap<usize, Vec<Post>>,
        pub comments: HashMap<PostId, Vec<Comment>>,
        pub failing: bool,
        /// When set, requests for pages after the first wait for a permit
        pub gate: Option<Arc<Semaphore>>,
        pub post_calls: Mutex<Vec<(usize, usize)>>,
        pub comment_calls: Mutex<Vec<PostId>>,
    }

    impl MockService {
        pub fn with_pages(pages: impl IntoIterator<Item = (usize, Vec<Post>)>) -> Self {
            Self {
                pages: pages.into_iter().collect(),
                ..Default::default()
            }
        }

        pub fn post_calls(&self) -> Vec<(usize, usize)> {
            self.post_calls.lock().unwrap().clone()
        }

        pub fn comment_calls(&self) -> Vec<PostId> {
            self.comment_calls.lock().unwrap().clone()
        }

        fn failure() -> TransportError {
            TransportError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }

    #[async_trait]
    impl ServiceProvider for MockService {
        async fn fetch_posts(
            &self,
            page: usize,
            limit: usize,
        ) -> Result<Vec<Post>, TransportError> {
            self.post_calls.lock().unwrap().push((page, limit));
            if page > 1 {
                if let Some(gate) = &self.gate {
                    gate.acquire().await.unwrap().forget();
                }
            }
            if self.failing {
                return Err(Self::failure());
            }
            Ok(self.pages.get(&page).cloned().unwrap_or_default())
        }

        async fn fetch_comments(&self, post_id: PostId) -> Result<Vec<Comment>, TransportError> {
            self.comment_calls.lock().unwrap().push(post_id);
            if self.failing {
                return Err(Self::failure());
            }
            Ok(self.comments.get(&post_id).cloned().unwrap_or_default())
        }
    }

    pub fn model(service: &Arc<MockService>) -> Model {
        Model::with_provider("mock://", service.clone())
    }
}
