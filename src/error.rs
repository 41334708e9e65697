//! Error types for configuration validation and layout resolution

use thiserror::Error;

use crate::presets::PresetKind;

/// Configuration and resolution errors
///
/// All of these are returned synchronously to the control context; the audio
/// thread never observes them directly, it only sees the codec status.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Ambisonic order {0} is outside the supported range 1..=7")]
    OrderOutOfRange(u32),

    #[error("FuMa channel ordering/normalisation is only supported at first order")]
    FumaRequiresFirstOrder,

    #[error("Unknown {kind} preset id: {raw}")]
    UnknownPreset { kind: PresetKind, raw: u32 },

    #[error("Layout resolution failed: {0}")]
    ResolutionFailed(String),
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
