//! Domain error types.

use std::path::PathBuf;

/// Top-level error type for confpacket.
///
/// Only unrecoverable conditions live here. A failed read or a missing
/// section is reported on [`crate::domain::load_report::LoadReport`] instead.
#[derive(Debug, thiserror::Error)]
pub enum ConfPacketError {
    #[error("config.ini corrupt or not found: no sections in {}", path.display())]
    ConfigurationCorruptOrMissing { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&ConfPacketError> for std::process::ExitCode {
    fn from(err: &ConfPacketError) -> Self {
        let code: u8 = match err {
            ConfPacketError::Io(_) => 1,
            ConfPacketError::ConfigurationCorruptOrMissing { .. } => 2,
        };
        std::process::ExitCode::from(code)
    }
}
