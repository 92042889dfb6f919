mod loader;

pub use loader::{LoadError, load_config_from_json};
