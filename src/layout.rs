//! Layout resolution
//!
//! Combines order, conventions and preset into a [`ResolvedLayout`]: the
//! concrete channel configuration the DSP side processes against. Resolution
//! is a pure function of the configuration; identical inputs always produce
//! an identical layout, and nothing is published until the whole value is
//! built.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::CodecConfig;
use crate::error::ConfigError;
use crate::options::{ChannelOrder, Normalization, ShOrder};
use crate::presets::{
    Direction, FrequencyRange, LoudspeakerArrayPreset, MicArrayPreset, PresetId, SourceConfigPreset,
};

/// Semantic label of a single Ambisonic channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelLabel {
    /// Ambisonic Channel Number index (ACN ordering)
    Acn(u8),
    /// Furse-Malham omni (first order only)
    FumaW,
    FumaX,
    FumaY,
    FumaZ,
}

impl fmt::Display for ChannelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acn(n) => write!(f, "ACN{n}"),
            Self::FumaW => write!(f, "W"),
            Self::FumaX => write!(f, "X"),
            Self::FumaY => write!(f, "Y"),
            Self::FumaZ => write!(f, "Z"),
        }
    }
}

/// One channel of a resolved layout: label plus normalisation gain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelSpec {
    pub label: ChannelLabel,
    pub gain: f32,
}

/// Geometry joined in from the preset table
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    MicArray {
        preset: MicArrayPreset,
        directions: &'static [Direction],
        /// Band in which the array delivers the resolved order
        usable_range: FrequencyRange,
    },
    Loudspeakers {
        preset: LoudspeakerArrayPreset,
        directions: &'static [Direction],
    },
    Sources {
        preset: SourceConfigPreset,
        directions: &'static [Direction],
    },
}

/// Immutable, validated channel configuration
///
/// Built in one piece by [`resolve_layout`], then shared behind an `Arc` and
/// never mutated; a configuration change replaces the whole snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLayout {
    pub order: ShOrder,
    pub ordering: ChannelOrder,
    pub normalization: Normalization,
    pub channels: Vec<ChannelSpec>,
    pub geometry: Geometry,
}

impl ResolvedLayout {
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}

/// SH degree ℓ of the channel at ACN index `n`: ℓ = ⌊√n⌋
fn acn_degree(n: usize) -> u32 {
    let mut degree = 0u32;
    while ((degree + 1) * (degree + 1)) as usize <= n {
        degree += 1;
    }
    degree
}

/// Per-channel gain for a normalisation convention, given the SH degree.
///
/// The reference table is Schmidt semi-normalised with a 1/√2 scaling on the
/// omni; N3D additionally weights each degree by √(2ℓ+1); FuMa is SN3D
/// without the omni scaling.
fn channel_gain(degree: u32, normalization: Normalization) -> f32 {
    let omni_scale = if degree == 0 {
        std::f32::consts::FRAC_1_SQRT_2
    } else {
        1.0
    };
    match normalization {
        Normalization::Sn3d => omni_scale,
        Normalization::N3d => omni_scale * ((2 * degree + 1) as f32).sqrt(),
        Normalization::Fuma => 1.0,
    }
}

fn channel_specs(
    order: ShOrder,
    ordering: ChannelOrder,
    normalization: Normalization,
) -> Vec<ChannelSpec> {
    let count = order.sh_channel_count();
    match ordering {
        ChannelOrder::Acn => (0..count)
            .map(|n| ChannelSpec {
                label: ChannelLabel::Acn(n as u8),
                gain: channel_gain(acn_degree(n), normalization),
            })
            .collect(),
        // FuMa is only valid at first order, where the fixed WXYZ sequence
        // has the omni first and the three dipoles after it
        ChannelOrder::Fuma => [
            (ChannelLabel::FumaW, 0),
            (ChannelLabel::FumaX, 1),
            (ChannelLabel::FumaY, 1),
            (ChannelLabel::FumaZ, 1),
        ]
        .into_iter()
        .map(|(label, degree)| ChannelSpec {
            label,
            gain: channel_gain(degree, normalization),
        })
        .collect(),
    }
}

/// Resolve a validated configuration into a concrete layout
///
/// Runs the cross-option validation first, then joins the preset descriptor.
/// A microphone array that cannot deliver the requested order fails with
/// [`ConfigError::ResolutionFailed`]; no partial layout escapes.
pub fn resolve_layout(config: &CodecConfig) -> Result<ResolvedLayout, ConfigError> {
    config.validate()?;

    let geometry = match config.preset {
        PresetId::Mic(preset) => {
            let desc = preset.descriptor();
            let usable_range = desc.usable_range(config.order).ok_or_else(|| {
                ConfigError::ResolutionFailed(format!(
                    "{} does not provide order-{} components",
                    desc.name,
                    config.order.numeric()
                ))
            })?;
            Geometry::MicArray {
                preset,
                directions: desc.directions,
                usable_range,
            }
        }
        PresetId::Loudspeaker(preset) => Geometry::Loudspeakers {
            preset,
            directions: preset.descriptor().directions,
        },
        PresetId::Source(preset) => Geometry::Sources {
            preset,
            directions: preset.descriptor().directions,
        },
    };

    Ok(ResolvedLayout {
        order: config.order,
        ordering: config.ordering,
        normalization: config.normalization,
        channels: channel_specs(config.order, config.ordering, config.normalization),
        geometry,
    })
}
