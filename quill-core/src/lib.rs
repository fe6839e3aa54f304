pub mod config;
pub mod error;
pub mod health;
pub mod layers;
pub mod server;
pub mod validation;

pub use config::{ConfigError, ConfigValue, FromConfigValue, QuillConfig, ServerSettings};
pub use error::{error_response, HttpError};
pub use layers::{catch_panic_layer, default_cors, default_trace, init_tracing};
pub use validation::{FieldError, Validated, ValidationErrorResponse};
