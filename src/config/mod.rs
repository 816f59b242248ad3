//! Configuration management

mod settings;
mod store;

pub use settings::{
    default_config_path, load_store, save_store, ClockSettings, FaceSetting,
};
pub use store::{ConfigError, ConfigStore};
