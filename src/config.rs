//! Declarative codec configuration
//!
//! A [`CodecConfig`] is the bundle of options a host hands to the lifecycle
//! controller. It is plain data: serialisable for session persistence and
//! cheap to copy, with validation kept separate so rejection reasons stay
//! deterministic.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::options::{validate_options, ChannelOrder, Normalization, ShOrder};
use crate::presets::{MicArrayPreset, PresetId, PresetKind};

/// Complete set of user-facing codec options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CodecConfig {
    pub order: ShOrder,
    pub ordering: ChannelOrder,
    pub normalization: Normalization,
    pub preset: PresetId,
}

impl CodecConfig {
    pub fn new(
        order: ShOrder,
        ordering: ChannelOrder,
        normalization: Normalization,
        preset: PresetId,
    ) -> Self {
        Self {
            order,
            ordering,
            normalization,
            preset,
        }
    }

    /// Build a configuration from raw host values (numeric order, integer
    /// preset id), failing on out-of-range inputs
    pub fn from_raw(
        order: u32,
        ordering: ChannelOrder,
        normalization: Normalization,
        preset_kind: PresetKind,
        preset_raw: u32,
    ) -> Result<Self, ConfigError> {
        let order = ShOrder::from_numeric(order)?;
        let preset = PresetId::try_from_raw(preset_kind, preset_raw)?;
        Ok(Self::new(order, ordering, normalization, preset))
    }

    /// Check the cross-option constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_options(self.order, self.ordering, self.normalization)
    }
}

impl Default for CodecConfig {
    /// First order, ACN/SN3D, ideal microphone array
    fn default() -> Self {
        Self::new(
            ShOrder::First,
            ChannelOrder::Acn,
            Normalization::Sn3d,
            PresetId::Mic(MicArrayPreset::Ideal),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(CodecConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_raw() {
        let config = CodecConfig::from_raw(
            2,
            ChannelOrder::Acn,
            Normalization::N3d,
            PresetKind::Mic,
            3,
        )
        .unwrap();
        assert_eq!(config.order, ShOrder::Second);
        assert_eq!(config.preset, PresetId::Mic(MicArrayPreset::Eigenmike32));
    }

    #[test]
    fn test_from_raw_rejects_bad_order() {
        let err = CodecConfig::from_raw(
            9,
            ChannelOrder::Acn,
            Normalization::Sn3d,
            PresetKind::Mic,
            1,
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::OrderOutOfRange(9));
    }

    #[test]
    fn test_from_raw_rejects_bad_preset() {
        let err = CodecConfig::from_raw(
            1,
            ChannelOrder::Acn,
            Normalization::Sn3d,
            PresetKind::Loudspeaker,
            9999,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownPreset {
                kind: PresetKind::Loudspeaker,
                raw: 9999
            }
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let config = CodecConfig::new(
            ShOrder::Third,
            ChannelOrder::Acn,
            Normalization::N3d,
            PresetId::Mic(MicArrayPreset::Eigenmike32),
        );
        let json = serde_json::to_string(&config).unwrap();
        let back: CodecConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
