//! Shared codec/processing status flags
//!
//! Two small atomics form the handshake between the control context and the
//! real-time audio callback. The codec status is written only by the
//! lifecycle controller; the processing status only by the audio gate. Both
//! sides use `SeqCst` so neither can reorder its own flag store past its
//! check of the other flag.

use std::sync::atomic::{AtomicU32, AtomicU8, Ordering};

/// Current status of the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecStatus {
    /// Not yet initialised, or the configuration has changed; input audio
    /// must not be processed
    NotInitialised,
    /// Initialisation in progress; input audio must not be processed
    Initialising,
    /// Ready; input audio may be processed against the published layout
    Initialised,
}

impl CodecStatus {
    fn as_u8(self) -> u8 {
        match self {
            Self::NotInitialised => 0,
            Self::Initialising => 1,
            Self::Initialised => 2,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            2 => Self::Initialised,
            1 => Self::Initialising,
            _ => Self::NotInitialised,
        }
    }
}

/// Current status of the processing loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcStatus {
    /// No callback is mid-flight; the codec may be reinitialised
    NotOngoing,
    /// A callback is processing audio; the codec must not be touched
    Ongoing,
}

impl ProcStatus {
    fn as_u8(self) -> u8 {
        match self {
            Self::NotOngoing => 0,
            Self::Ongoing => 1,
        }
    }

    fn from_u8(value: u8) -> Self {
        if value == 1 {
            Self::Ongoing
        } else {
            Self::NotOngoing
        }
    }
}

/// Atomic status block shared between the controller and the audio gate
pub(crate) struct SharedStatus {
    codec: AtomicU8,
    proc: AtomicU8,
    /// Initialisation progress, f32 bits in 0.0..=1.0
    progress_bits: AtomicU32,
}

impl SharedStatus {
    pub(crate) fn new() -> Self {
        Self {
            codec: AtomicU8::new(CodecStatus::NotInitialised.as_u8()),
            proc: AtomicU8::new(ProcStatus::NotOngoing.as_u8()),
            progress_bits: AtomicU32::new(0f32.to_bits()),
        }
    }

    pub(crate) fn codec_status(&self) -> CodecStatus {
        CodecStatus::from_u8(self.codec.load(Ordering::SeqCst))
    }

    pub(crate) fn set_codec_status(&self, status: CodecStatus) {
        self.codec.store(status.as_u8(), Ordering::SeqCst);
    }

    pub(crate) fn proc_status(&self) -> ProcStatus {
        ProcStatus::from_u8(self.proc.load(Ordering::SeqCst))
    }

    pub(crate) fn set_proc_status(&self, status: ProcStatus) {
        self.proc.store(status.as_u8(), Ordering::SeqCst);
    }

    pub(crate) fn progress(&self) -> f32 {
        f32::from_bits(self.progress_bits.load(Ordering::Relaxed))
    }

    pub(crate) fn set_progress(&self, fraction: f32) {
        self.progress_bits
            .store(fraction.clamp(0.0, 1.0).to_bits(), Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let shared = SharedStatus::new();
        assert_eq!(shared.codec_status(), CodecStatus::NotInitialised);
        assert_eq!(shared.proc_status(), ProcStatus::NotOngoing);
        assert_eq!(shared.progress(), 0.0);
    }

    #[test]
    fn test_status_round_trip() {
        let shared = SharedStatus::new();
        for status in [
            CodecStatus::Initialising,
            CodecStatus::Initialised,
            CodecStatus::NotInitialised,
        ] {
            shared.set_codec_status(status);
            assert_eq!(shared.codec_status(), status);
        }
        shared.set_proc_status(ProcStatus::Ongoing);
        assert_eq!(shared.proc_status(), ProcStatus::Ongoing);
    }

    #[test]
    fn test_progress_clamped() {
        let shared = SharedStatus::new();
        shared.set_progress(1.5);
        assert_eq!(shared.progress(), 1.0);
        shared.set_progress(-0.5);
        assert_eq!(shared.progress(), 0.0);
        shared.set_progress(0.25);
        assert_eq!(shared.progress(), 0.25);
    }
}
