mod app;
pub mod components;
pub mod environment;
pub mod store;
pub mod view_model;

pub use app::{run, App};
pub use environment::entities::{Comment, Post};
pub use environment::Environment;
pub use view_model::FetchingState;
