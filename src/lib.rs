//! # Ambisonic Codec
//!
//! Configuration lifecycle and resolution engine for spatial audio:
//! declarative options (spherical harmonic order, channel ordering and
//! normalisation conventions, array/source presets) are validated, resolved
//! into a concrete channel layout, and handed to a real-time audio callback
//! without glitching or racing it.
//!
//! ## Architecture
//!
//! ```text
//!  control context                          real-time context
//!  ┌──────────────────────────────┐         ┌──────────────────────────┐
//!  │ CodecConfig                  │         │ audio callback           │
//!  │   │ validate_options         │         │   │                      │
//!  │   ▼                          │         │   ▼                      │
//!  │ resolve_layout ──► Resolved  │ layout  │ RealtimeGate             │
//!  │                    Layout ───┼────────►│   adopt newest layout    │
//!  │ CodecController              │ channel │   check codec status     │
//!  │   status: AtomicU8 ──────────┼────────►│   process or bypass      │
//!  │   waits on proc status ◄─────┼─────────┤   proc: AtomicU8         │
//!  └──────────────────────────────┘         └──────────────────────────┘
//! ```
//!
//! The controller publishes each finished layout before flipping the status
//! flag, and waits for the in-flight callback to end before mutating state;
//! the gate flags itself as ongoing before reading the status. Callbacks
//! therefore always see either the previous complete layout or the new one.

pub mod codec;
pub mod config;
pub mod error;
pub mod layout;
pub mod options;
pub mod presets;

pub use codec::{create_codec, AudioProcessor, CodecController, CodecStatus, ProcStatus, RealtimeGate};
pub use config::CodecConfig;
pub use error::{ConfigError, Result};
pub use layout::{ChannelLabel, ChannelSpec, Geometry, ResolvedLayout};
pub use options::{ChannelOrder, Normalization, ShOrder};
pub use presets::{
    Direction, FrequencyRange, LoudspeakerArrayPreset, MicArrayPreset, PresetId, PresetKind,
    SourceConfigPreset,
};

/// Application-wide constants
pub mod constants {
    /// Maximum supported Ambisonic order
    pub const MAX_SH_ORDER: u32 = 7;

    /// Maximum number of input/output channels supported
    pub const MAX_NUM_CHANNELS: usize = 64;

    /// Maximum number of spherical harmonic signals: `(MAX_SH_ORDER + 1)²`
    pub const MAX_NUM_SH_SIGNALS: usize =
        (MAX_SH_ORDER as usize + 1) * (MAX_SH_ORDER as usize + 1);

    /// Poll interval while the controller waits for an in-flight callback
    pub const STATUS_POLL_INTERVAL_US: u64 = 50;
}
