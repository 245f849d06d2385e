use fxbook_core::{GatewayError, ValidationError};
use thiserror::Error;

/// Failure of a single command invocation. The dispatcher renders these and
/// keeps the session running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Usage(&'static str),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Failed to create order: {detail}")]
    CreateOrder { detail: String },

    #[error("Failed to cancel order: {detail}")]
    CancelOrder { detail: String },

    #[error("Unknown command: {name}")]
    Unknown { name: String },
}

/// Process-level errors mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Could not connect to the Order Service at {base_url}")]
    Startup { base_url: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Startup { .. } => 1,
            Self::Io(_) => 10,
        }
    }
}
