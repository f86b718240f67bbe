/// MenuMind - serverless API layer for an AI-assisted restaurant menu app.
///
/// This crate implements the server-side surface of MenuMind as a single
/// Lambda function fronting three endpoints:
/// 1. `/api/chat` - proxies the customer conversation to the Claude
///    completion API so the API key never reaches the browser
/// 2. `/api/telegram` - formats a placed order and delivers it to the
///    restaurant's Telegram channel
/// 3. `/api/verify-admin` - constant-time admin password verification
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution (one request in, one response out)
/// - reqwest for outbound calls to the completion and messaging providers
/// - Tokio for the async runtime
///
/// It also carries the reusable first-party logic of the admin dashboard:
/// the analytics aggregations (`analytics`) and the menu-aware system
/// prompt builder (`prompt`).
///
/// # Example
///
/// ```no_run
/// use menumind::api::handler;
///
/// #[tokio::main]
/// async fn main() -> Result<(), lambda_runtime::Error> {
///     menumind::setup_logging();
///     lambda_runtime::run(lambda_runtime::service_fn(handler)).await
/// }
/// ```
// Module declarations
pub mod ai;
pub mod analytics;
pub mod api;
pub mod core;
pub mod errors;
pub mod messaging;
pub mod prompt;

pub use errors::ApiError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// menumind::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
