pub mod cors;
pub mod error_handler;
pub mod logging;

pub use cors::cors;
pub use error_handler::{error_handler, json_error_handler, ErrorHandlerMiddleware};
pub use logging::{Logging, LoggingMiddleware};
