//! Common types, rendering, and errors shared across `nginx-entrypoint` crates.

pub mod env;
pub mod error;
pub mod render;

pub use env::{load_environment, load_environment_with, EnvironmentSnapshot};
pub use error::EntrypointError;
pub use render::{render_frontend_config, render_server_config, FrontendConfig, PLACEHOLDER};
