use std::path::PathBuf;

/// Errors native to the bootstrap sequence.
///
/// Everything past dispatch (bind failures, serve errors) belongs to the
/// serving phase and travels as `anyhow::Error` instead.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The resolved configuration file does not exist. Never recovered or
    /// defaulted: the process aborts so the failure surfaces here instead
    /// of deep inside the search engine's initialization.
    #[error("configuration file not found at {}", path.display())]
    ConfigurationMissing { path: PathBuf },

    /// The operating system could not report the running executable's path.
    #[error("failed to resolve the entry point location: {0}")]
    EntryPoint(#[from] std::io::Error),
}

impl BootstrapError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            BootstrapError::ConfigurationMissing { .. } => 1,
            BootstrapError::EntryPoint(_) => 2,
        }
    }
}
