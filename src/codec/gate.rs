//! Real-time side of the codec: the per-callback gate
//!
//! The gate runs inside the audio callback and must never block. Per block it
//! flags processing as ongoing, adopts the newest published layout (if any),
//! and either processes against the adopted layout or writes silence when the
//! codec is not ready. Layout hand-off uses a lock-free channel; stale
//! layouts queued between callbacks are coalesced, the newest one wins.

use std::sync::Arc;

use crossbeam_channel::Receiver;

use crate::codec::status::{CodecStatus, ProcStatus, SharedStatus};
use crate::layout::ResolvedLayout;

/// DSP collaborator driven by the gate
///
/// `apply_layout` is invoked once whenever the gate adopts a newly published
/// layout; `process` runs once per callback while the codec is initialised.
/// Implementations must be real-time safe in `process`.
pub trait AudioProcessor: Send {
    fn apply_layout(&mut self, layout: &ResolvedLayout);

    fn process(&mut self, input: &[f32], output: &mut [f32], layout: &ResolvedLayout);
}

/// Audio-thread end of the codec
pub struct RealtimeGate {
    shared: Arc<SharedStatus>,
    layout_rx: Receiver<Arc<ResolvedLayout>>,
    active: Option<Arc<ResolvedLayout>>,
    processor: Box<dyn AudioProcessor>,
}

impl RealtimeGate {
    pub(crate) fn new(
        shared: Arc<SharedStatus>,
        layout_rx: Receiver<Arc<ResolvedLayout>>,
        processor: Box<dyn AudioProcessor>,
    ) -> Self {
        Self {
            shared,
            layout_rx,
            active: None,
            processor,
        }
    }

    /// Run one audio callback
    ///
    /// Marks processing as ongoing for the duration of the call so the
    /// controller can observe when no callback is mid-flight. If the codec
    /// is not initialised the block is bypassed with silence.
    pub fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        self.shared.set_proc_status(ProcStatus::Ongoing);

        // Adopt the newest published layout; intermediate ones superseded
        // while we were away are dropped unapplied.
        let mut adopted = None;
        while let Ok(layout) = self.layout_rx.try_recv() {
            adopted = Some(layout);
        }
        if let Some(layout) = adopted {
            self.processor.apply_layout(&layout);
            self.active = Some(layout);
        }

        let ready = self.shared.codec_status() == CodecStatus::Initialised;
        match (&self.active, ready) {
            (Some(layout), true) => self.processor.process(input, output, layout),
            _ => output.fill(0.0),
        }

        self.shared.set_proc_status(ProcStatus::NotOngoing);
    }

    /// Layout the gate is currently processing against, if any
    pub fn active_layout(&self) -> Option<&Arc<ResolvedLayout>> {
        self.active.as_ref()
    }
}
