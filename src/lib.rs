pub mod analysis;
pub mod config;
pub mod formatter;
pub mod services;
pub mod session;
pub mod shell;
pub mod workflows;

// Re-export the pieces the binary and the shell wire together
pub use config::DeskConfig;
pub use services::api::client::ApiClient;
pub use session::{SessionHandle, SessionRegistry};
pub use workflows::Desk;
