pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod sanitize;
pub mod server;
pub mod state;
pub mod summary;
pub mod validation;

pub use error::AppError;
pub use server::{app_config, run_server, ServerConfig};
pub use state::AppState;
pub use summary::{SummaryError, SummaryService};
pub use validation::{validate_request, SummarizeRequest, ValidationError, MAX_TEXT_CHARS};
