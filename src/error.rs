//! Application error type carrying a process exit code.
//!
//! Exit codes:
//! - 2: configuration/input validation (malformed axis range, bad threshold
//!   lists, color-count mismatch, unwritable export paths)
//! - 4: runtime failures (terminal init, draw errors)
//!
//! Validation errors are configuration bugs to fix at the source; nothing is
//! retried or recovered.

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Configuration/input validation failure (exit code 2).
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// Runtime failure (exit code 4).
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
