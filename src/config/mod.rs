/// Store configuration loading from store.toml
pub mod store;

/// Operator identity from environment variables
pub mod operator;

pub use operator::{Operator, current_operator};
pub use store::{
    AppConfig, SeedConfig, config_path, load_app_configuration, load_config, load_config_or_default,
};
