//! Spherical harmonic order and convention options
//!
//! These are the user-facing knobs of the codec. They are closed enums so
//! that validation can match exhaustively; raw integers coming from a host
//! or saved session are converted at the edge via `try_from`-style parsers.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Spherical harmonic input/output order
///
/// Determines the number of SH channels via `(order + 1)²`, so seventh order
/// tops out at the 64-channel limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShOrder {
    /// First-order (4 channels)
    First,
    /// Second-order (9 channels)
    Second,
    /// Third-order (16 channels)
    Third,
    /// Fourth-order (25 channels)
    Fourth,
    /// Fifth-order (36 channels)
    Fifth,
    /// Sixth-order (49 channels)
    Sixth,
    /// Seventh-order (64 channels)
    Seventh,
}

impl ShOrder {
    /// All supported orders, lowest first
    pub const ALL: [ShOrder; 7] = [
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
        Self::Sixth,
        Self::Seventh,
    ];

    /// Numeric order value (1..=7)
    pub fn numeric(self) -> u32 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Fifth => 5,
            Self::Sixth => 6,
            Self::Seventh => 7,
        }
    }

    /// Number of spherical harmonic channels at this order: `(order + 1)²`
    pub fn sh_channel_count(self) -> usize {
        let n = self.numeric() as usize;
        (n + 1) * (n + 1)
    }

    /// Parse a raw order value as supplied by a host or saved session
    pub fn from_numeric(order: u32) -> Result<Self, ConfigError> {
        match order {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            4 => Ok(Self::Fourth),
            5 => Ok(Self::Fifth),
            6 => Ok(Self::Sixth),
            7 => Ok(Self::Seventh),
            other => Err(ConfigError::OrderOutOfRange(other)),
        }
    }
}

/// Ambisonic channel ordering convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelOrder {
    /// Ambisonic Channel Numbering (ACN)
    Acn,
    /// (Obsolete) Furse-Malham/B-format WXYZ, first order only
    Fuma,
}

/// Ambisonic normalisation convention
///
/// FuMa does NOT apply the 1/√2 scaling on the omni channel that N3D and
/// SN3D do, and is only defined for first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Normalization {
    /// Orthonormalised (N3D)
    N3d,
    /// Schmidt semi-normalisation (SN3D)
    Sn3d,
    /// (Obsolete) Same as SN3D for first order, without the omni scaling
    Fuma,
}

/// Cross-option validation
///
/// Pure function; rules are checked in a fixed sequence so rejections are
/// deterministic:
/// 1. the order itself (already guaranteed in range by [`ShOrder`]),
/// 2. FuMa ordering requires first order,
/// 3. FuMa normalisation requires first order.
pub fn validate_options(
    order: ShOrder,
    ordering: ChannelOrder,
    normalization: Normalization,
) -> Result<(), ConfigError> {
    if ordering == ChannelOrder::Fuma && order != ShOrder::First {
        return Err(ConfigError::FumaRequiresFirstOrder);
    }
    if normalization == Normalization::Fuma && order != ShOrder::First {
        return Err(ConfigError::FumaRequiresFirstOrder);
    }
    Ok(())
}
