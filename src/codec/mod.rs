//! Codec lifecycle: control-side state machine and real-time gate
//!
//! [`create_codec`] wires the two halves together: the [`CodecController`]
//! stays with the control context, the [`RealtimeGate`] moves into the audio
//! callback. The only shared state is a pair of status atomics and the
//! layout hand-off channel, so the audio side never takes a lock.

pub mod controller;
pub mod gate;
pub mod status;

use std::sync::Arc;

pub use controller::CodecController;
pub use gate::{AudioProcessor, RealtimeGate};
pub use status::{CodecStatus, ProcStatus};

use status::SharedStatus;

/// Create a connected controller/gate pair around a DSP processor
pub fn create_codec(processor: Box<dyn AudioProcessor>) -> (CodecController, RealtimeGate) {
    let shared = Arc::new(SharedStatus::new());
    let (layout_tx, layout_rx) = crossbeam_channel::unbounded();
    let controller = CodecController::new(Arc::clone(&shared), layout_tx);
    let gate = RealtimeGate::new(shared, layout_rx, processor);
    (controller, gate)
}
