//! Compiled-in preset data
//!
//! Direction tables are nominal capsule/speaker positions. The per-order
//! frequency ranges of the physical microphone arrays are approximate
//! calibration data (spatial-aliasing and noise-amplification limits); treat
//! them as tunable constants, not measurements.

use super::{Direction, FrequencyRange, LayoutDescriptor, MicArrayDescriptor};

const fn dir(azimuth_deg: f32, elevation_deg: f32) -> Direction {
    Direction::new(azimuth_deg, elevation_deg)
}

const fn band(min_hz: f32, max_hz: f32) -> Option<FrequencyRange> {
    Some(FrequencyRange::Bounded { min_hz, max_hz })
}

/* ------------------------------ microphones ------------------------------ */

/// Ideal SH receiver: no physical capsules, every order unbounded
pub static MIC_IDEAL: MicArrayDescriptor = MicArrayDescriptor {
    name: "Ideal SH",
    directions: &[],
    ranges: [Some(FrequencyRange::Ideal); 7],
};

/// Zylia ZM-1, 19 capsules (nominal positions)
pub static MIC_ZYLIA: MicArrayDescriptor = MicArrayDescriptor {
    name: "Zylia ZM-1",
    directions: &[
        dir(0.0, 90.0),
        dir(0.0, 45.0),
        dir(60.0, 45.0),
        dir(120.0, 45.0),
        dir(180.0, 45.0),
        dir(-120.0, 45.0),
        dir(-60.0, 45.0),
        dir(30.0, 0.0),
        dir(90.0, 0.0),
        dir(150.0, 0.0),
        dir(-150.0, 0.0),
        dir(-90.0, 0.0),
        dir(-30.0, 0.0),
        dir(0.0, -45.0),
        dir(60.0, -45.0),
        dir(120.0, -45.0),
        dir(180.0, -45.0),
        dir(-120.0, -45.0),
        dir(-60.0, -45.0),
    ],
    ranges: [band(90.0, 12_000.0), None, None, None, None, None, None],
};

/// mh acoustics Eigenmike, 32 capsules
pub static MIC_EIGENMIKE32: MicArrayDescriptor = MicArrayDescriptor {
    name: "Eigenmike32",
    directions: &[
        dir(0.0, 21.0),
        dir(32.0, 0.0),
        dir(0.0, -21.0),
        dir(-32.0, 0.0),
        dir(0.0, 58.0),
        dir(45.0, 35.0),
        dir(69.0, 0.0),
        dir(45.0, -35.0),
        dir(0.0, -58.0),
        dir(-45.0, -35.0),
        dir(-69.0, 0.0),
        dir(-45.0, 35.0),
        dir(91.0, 69.0),
        dir(90.0, 32.0),
        dir(90.0, -31.0),
        dir(89.0, -69.0),
        dir(180.0, 21.0),
        dir(-148.0, 0.0),
        dir(180.0, -21.0),
        dir(148.0, 0.0),
        dir(180.0, 58.0),
        dir(-135.0, 35.0),
        dir(-111.0, 0.0),
        dir(-135.0, -35.0),
        dir(180.0, -58.0),
        dir(135.0, -35.0),
        dir(111.0, 0.0),
        dir(135.0, 35.0),
        dir(-91.0, 69.0),
        dir(-90.0, 32.0),
        dir(-90.0, -32.0),
        dir(-89.0, -69.0),
    ],
    ranges: [
        band(68.0, 9_000.0),
        band(280.0, 9_000.0),
        band(1_100.0, 9_000.0),
        band(2_600.0, 9_000.0),
        None,
        None,
        None,
    ],
};

/* ------------------------------ loudspeakers ----------------------------- */

const QUAD: [Direction; 4] = [
    dir(45.0, 0.0),
    dir(-45.0, 0.0),
    dir(135.0, 0.0),
    dir(-135.0, 0.0),
];

const STEREO: [Direction; 2] = [dir(30.0, 0.0), dir(-30.0, 0.0)];

const FIVE_PX: [Direction; 5] = [
    dir(30.0, 0.0),
    dir(-30.0, 0.0),
    dir(0.0, 0.0),
    dir(110.0, 0.0),
    dir(-110.0, 0.0),
];

const SEVEN_PX: [Direction; 7] = [
    dir(30.0, 0.0),
    dir(-30.0, 0.0),
    dir(0.0, 0.0),
    dir(90.0, 0.0),
    dir(-90.0, 0.0),
    dir(135.0, 0.0),
    dir(-135.0, 0.0),
];

// Vertices of a regular tetrahedron
const TDESIGN_4: [Direction; 4] = [
    dir(45.0, 35.264),
    dir(-45.0, -35.264),
    dir(135.0, -35.264),
    dir(-135.0, 35.264),
];

// Vertices of a regular icosahedron
const TDESIGN_12: [Direction; 12] = [
    dir(90.0, 58.2825),
    dir(90.0, -58.2825),
    dir(-90.0, 58.2825),
    dir(-90.0, -58.2825),
    dir(58.2825, 0.0),
    dir(-58.2825, 0.0),
    dir(121.7175, 0.0),
    dir(-121.7175, 0.0),
    dir(0.0, 31.7175),
    dir(0.0, -31.7175),
    dir(180.0, 31.7175),
    dir(180.0, -31.7175),
];

pub static LS_DEFAULT: LayoutDescriptor = LayoutDescriptor {
    name: "Quad",
    directions: &QUAD,
};

pub static LS_STEREO: LayoutDescriptor = LayoutDescriptor {
    name: "Stereo",
    directions: &STEREO,
};

pub static LS_5PX: LayoutDescriptor = LayoutDescriptor {
    name: "5.x",
    directions: &FIVE_PX,
};

pub static LS_7PX: LayoutDescriptor = LayoutDescriptor {
    name: "7.x",
    directions: &SEVEN_PX,
};

pub static LS_TDESIGN_4: LayoutDescriptor = LayoutDescriptor {
    name: "T-design (4)",
    directions: &TDESIGN_4,
};

pub static LS_TDESIGN_12: LayoutDescriptor = LayoutDescriptor {
    name: "T-design (12)",
    directions: &TDESIGN_12,
};

/* -------------------------------- sources -------------------------------- */

// Source configurations reuse the loudspeaker direction tables; only the
// mono layout is specific to encoding.
const MONO: [Direction; 1] = [dir(0.0, 0.0)];

pub static SRC_DEFAULT: LayoutDescriptor = LayoutDescriptor {
    name: "Quad sources",
    directions: &QUAD,
};

pub static SRC_MONO: LayoutDescriptor = LayoutDescriptor {
    name: "Mono source",
    directions: &MONO,
};

pub static SRC_STEREO: LayoutDescriptor = LayoutDescriptor {
    name: "Stereo sources",
    directions: &STEREO,
};

pub static SRC_5PX: LayoutDescriptor = LayoutDescriptor {
    name: "5.x sources",
    directions: &FIVE_PX,
};

pub static SRC_7PX: LayoutDescriptor = LayoutDescriptor {
    name: "7.x sources",
    directions: &SEVEN_PX,
};

pub static SRC_TDESIGN_4: LayoutDescriptor = LayoutDescriptor {
    name: "T-design (4) sources",
    directions: &TDESIGN_4,
};

pub static SRC_TDESIGN_12: LayoutDescriptor = LayoutDescriptor {
    name: "T-design (12) sources",
    directions: &TDESIGN_12,
};
