pub mod entities;
pub mod model;
pub mod repository;
pub mod service;
pub mod types;

pub use model::Model;
pub use repository::Repository;

use self::types::Config;

/// Capabilities injected into every reducer. Holds no mutable state, so one
/// instance is shared by all stores.
#[derive(Clone)]
pub struct Environment {
    pub model: Model,
    pub config: Config,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish()
    }
}

impl Environment {
    pub fn new(model: Model, config: Config) -> Self {
        Self { model, config }
    }

    pub fn from_config(config: Config) -> Self {
        Self::new(Model::new(config.base_url.clone()), config)
    }
}
