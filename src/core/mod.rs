pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{GhxError, Result};
pub use types::{group_thousands, parse_integer, PanelSize, ResultId};
