//! Microphone, loudspeaker and source configuration presets
//!
//! Presets are compiled-in descriptors: an ordered direction sequence plus,
//! for microphone arrays, the frequency band in which the physical array
//! captures spherical harmonics of each order with acceptable accuracy.
//! Lookup is by closed enum variant, so an in-range preset can never miss;
//! raw integer ids from a host go through [`PresetId::try_from_raw`].

pub mod tables;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::options::ShOrder;

/// Which preset table a raw id refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresetKind {
    Mic,
    Loudspeaker,
    Source,
}

impl fmt::Display for PresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mic => write!(f, "microphone array"),
            Self::Loudspeaker => write!(f, "loudspeaker array"),
            Self::Source => write!(f, "source configuration"),
        }
    }
}

/// A direction on the sphere, in degrees
///
/// Azimuth is counter-clockwise from the front (+left), elevation is up from
/// the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    pub azimuth_deg: f32,
    pub elevation_deg: f32,
}

impl Direction {
    pub const fn new(azimuth_deg: f32, elevation_deg: f32) -> Self {
        Self {
            azimuth_deg,
            elevation_deg,
        }
    }
}

/// Usable frequency band for one spherical harmonic order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FrequencyRange {
    /// Unbounded; the no-op baseline used by the ideal array
    Ideal,
    /// Band in which the array delivers this order with acceptable accuracy
    Bounded { min_hz: f32, max_hz: f32 },
}

impl FrequencyRange {
    pub fn is_ideal(&self) -> bool {
        matches!(self, Self::Ideal)
    }

    /// Whether a frequency falls inside the usable band
    pub fn contains(&self, hz: f32) -> bool {
        match self {
            Self::Ideal => true,
            Self::Bounded { min_hz, max_hz } => hz >= *min_hz && hz <= *max_hz,
        }
    }
}

/// Microphone array descriptor
///
/// `ranges[n]` is the usable band at order `n + 1`; `None` means the array
/// cannot deliver that order at all.
pub struct MicArrayDescriptor {
    pub name: &'static str,
    pub directions: &'static [Direction],
    pub(crate) ranges: [Option<FrequencyRange>; 7],
}

impl MicArrayDescriptor {
    /// Usable frequency band at the given order, if the array supports it
    pub fn usable_range(&self, order: ShOrder) -> Option<FrequencyRange> {
        self.ranges[(order.numeric() - 1) as usize]
    }

    /// Highest order the array can deliver
    pub fn max_order(&self) -> Option<ShOrder> {
        ShOrder::ALL
            .iter()
            .rev()
            .copied()
            .find(|o| self.usable_range(*o).is_some())
    }
}

/// Loudspeaker array / source configuration descriptor
pub struct LayoutDescriptor {
    pub name: &'static str,
    pub directions: &'static [Direction],
}

/// Available microphone array presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MicArrayPreset {
    /// Hypothetical array capturing every order perfectly at all frequencies
    Ideal,
    /// Zylia ZM-1, 19 capsules, first order
    Zylia,
    /// mh acoustics Eigenmike, 32 capsules, up to fourth order
    Eigenmike32,
}

impl MicArrayPreset {
    pub fn descriptor(self) -> &'static MicArrayDescriptor {
        match self {
            Self::Ideal => &tables::MIC_IDEAL,
            Self::Zylia => &tables::MIC_ZYLIA,
            Self::Eigenmike32 => &tables::MIC_EIGENMIKE32,
        }
    }

    fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            1 => Some(Self::Ideal),
            2 => Some(Self::Zylia),
            3 => Some(Self::Eigenmike32),
            _ => None,
        }
    }
}

/// Available loudspeaker array presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoudspeakerArrayPreset {
    /// Horizontal quad, a safe generic rig
    Default,
    /// Stereo pair at ±30°
    Stereo,
    /// 5.x surround (LFE excluded)
    FivePointX,
    /// 7.x surround (LFE excluded)
    SevenPointX,
    /// Tetrahedral t-design, minimal first-order rig
    TDesign4,
    /// Icosahedral t-design, 12 points
    TDesign12,
}

impl LoudspeakerArrayPreset {
    pub fn descriptor(self) -> &'static LayoutDescriptor {
        match self {
            Self::Default => &tables::LS_DEFAULT,
            Self::Stereo => &tables::LS_STEREO,
            Self::FivePointX => &tables::LS_5PX,
            Self::SevenPointX => &tables::LS_7PX,
            Self::TDesign4 => &tables::LS_TDESIGN_4,
            Self::TDesign12 => &tables::LS_TDESIGN_12,
        }
    }

    fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            1 => Some(Self::Default),
            2 => Some(Self::Stereo),
            3 => Some(Self::FivePointX),
            4 => Some(Self::SevenPointX),
            5 => Some(Self::TDesign4),
            6 => Some(Self::TDesign12),
            _ => None,
        }
    }
}

/// Available source configuration presets for encoding/panning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceConfigPreset {
    /// Horizontal quad
    Default,
    /// Single source at the front
    Mono,
    /// Stereo pair at ±30°
    Stereo,
    /// 5.x source positions
    FivePointX,
    /// 7.x source positions
    SevenPointX,
    /// Tetrahedral t-design
    TDesign4,
    /// Icosahedral t-design
    TDesign12,
}

impl SourceConfigPreset {
    pub fn descriptor(self) -> &'static LayoutDescriptor {
        match self {
            Self::Default => &tables::SRC_DEFAULT,
            Self::Mono => &tables::SRC_MONO,
            Self::Stereo => &tables::SRC_STEREO,
            Self::FivePointX => &tables::SRC_5PX,
            Self::SevenPointX => &tables::SRC_7PX,
            Self::TDesign4 => &tables::SRC_TDESIGN_4,
            Self::TDesign12 => &tables::SRC_TDESIGN_12,
        }
    }

    fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            1 => Some(Self::Default),
            2 => Some(Self::Mono),
            3 => Some(Self::Stereo),
            4 => Some(Self::FivePointX),
            5 => Some(Self::SevenPointX),
            6 => Some(Self::TDesign4),
            7 => Some(Self::TDesign12),
            _ => None,
        }
    }
}

/// Validated preset selector carried by a codec configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresetId {
    Mic(MicArrayPreset),
    Loudspeaker(LoudspeakerArrayPreset),
    Source(SourceConfigPreset),
}

impl PresetId {
    pub fn kind(&self) -> PresetKind {
        match self {
            Self::Mic(_) => PresetKind::Mic,
            Self::Loudspeaker(_) => PresetKind::Loudspeaker,
            Self::Source(_) => PresetKind::Source,
        }
    }

    /// Human-readable preset name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mic(p) => p.descriptor().name,
            Self::Loudspeaker(p) => p.descriptor().name,
            Self::Source(p) => p.descriptor().name,
        }
    }

    /// Parse a raw preset id as supplied by a host or saved session
    pub fn try_from_raw(kind: PresetKind, raw: u32) -> Result<Self, ConfigError> {
        let parsed = match kind {
            PresetKind::Mic => MicArrayPreset::from_raw(raw).map(Self::Mic),
            PresetKind::Loudspeaker => LoudspeakerArrayPreset::from_raw(raw).map(Self::Loudspeaker),
            PresetKind::Source => SourceConfigPreset::from_raw(raw).map(Self::Source),
        };
        parsed.ok_or(ConfigError::UnknownPreset { kind, raw })
    }
}
