pub mod errors;
pub mod events;

pub use errors::{ConfigError, WinterError};
pub use events::EventBus;

pub type Result<T> = std::result::Result<T, WinterError>;
