//! Control side of the codec: lifecycle state machine
//!
//! The controller owns the codec status and serialises reconfiguration.
//! Resolution runs on the calling (non-real-time) thread; the finished
//! layout is published to the audio gate through a lock-free channel before
//! the status flag flips to initialised, so a callback that observes
//! `Initialised` always finds the corresponding complete layout.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::Sender;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::codec::status::{CodecStatus, ProcStatus, SharedStatus};
use crate::config::CodecConfig;
use crate::constants::STATUS_POLL_INTERVAL_US;
use crate::error::ConfigError;
use crate::layout::{resolve_layout, ResolvedLayout};

/// Control-context handle to the codec lifecycle
pub struct CodecController {
    shared: Arc<SharedStatus>,
    layout_tx: Sender<Arc<ResolvedLayout>>,
    /// Last successfully resolved layout; retained across failed requests
    current: Mutex<Option<Arc<ResolvedLayout>>>,
    /// Serialises reconfiguration: at most one in flight, latest caller wins
    reconfig: Mutex<()>,
    progress_text: Mutex<String>,
}

impl CodecController {
    pub(crate) fn new(shared: Arc<SharedStatus>, layout_tx: Sender<Arc<ResolvedLayout>>) -> Self {
        Self {
            shared,
            layout_tx,
            current: Mutex::new(None),
            reconfig: Mutex::new(()),
            progress_text: Mutex::new(String::new()),
        }
    }

    /// Apply a new configuration
    ///
    /// Validates and resolves on the calling thread, waiting out any
    /// in-flight audio callback before state changes become visible. On
    /// error the codec is left uninitialised but the previously resolved
    /// layout is kept, so a failed request never discards a working
    /// configuration.
    pub fn request_reconfigure(&self, config: CodecConfig) -> Result<(), ConfigError> {
        let _serial = self.reconfig.lock();
        debug!(?config, "codec reconfiguration requested");

        // Flag first so new callbacks bypass, then wait for the one that
        // may already be mid-flight.
        self.shared.set_codec_status(CodecStatus::Initialising);
        self.set_progress(0.0, "resolving layout");
        while self.shared.proc_status() == ProcStatus::Ongoing {
            thread::sleep(Duration::from_micros(STATUS_POLL_INTERVAL_US));
        }

        let layout = match resolve_layout(&config) {
            Ok(layout) => Arc::new(layout),
            Err(e) => {
                warn!(error = %e, "codec configuration rejected");
                self.set_progress(0.0, "");
                self.shared.set_codec_status(CodecStatus::NotInitialised);
                return Err(e);
            }
        };

        self.set_progress(0.5, "publishing layout");
        // Publish before the flag flip; a dropped gate just means there is
        // no audio side to hand the layout to.
        let _ = self.layout_tx.send(Arc::clone(&layout));
        *self.current.lock() = Some(Arc::clone(&layout));

        self.set_progress(1.0, "ready");
        self.shared.set_codec_status(CodecStatus::Initialised);
        info!(
            order = layout.order.numeric(),
            channels = layout.channel_count(),
            preset = config.preset.name(),
            "codec initialised"
        );
        Ok(())
    }

    /// Current codec status (read-only; only the controller transitions it)
    pub fn status(&self) -> CodecStatus {
        self.shared.codec_status()
    }

    /// Last successfully resolved layout, `None` before the first success
    pub fn resolved_layout(&self) -> Option<Arc<ResolvedLayout>> {
        self.current.lock().clone()
    }

    /// Initialisation progress in 0.0..=1.0
    pub fn progress(&self) -> f32 {
        self.shared.progress()
    }

    /// Human-readable description of the current initialisation step
    pub fn progress_text(&self) -> String {
        self.progress_text.lock().clone()
    }

    fn set_progress(&self, fraction: f32, text: &str) {
        self.shared.set_progress(fraction);
        let mut guard = self.progress_text.lock();
        guard.clear();
        guard.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{ChannelOrder, Normalization, ShOrder};
    use crate::presets::{MicArrayPreset, PresetId};

    fn controller() -> CodecController {
        let shared = Arc::new(SharedStatus::new());
        let (tx, rx) = crossbeam_channel::unbounded();
        // Keep the receiver alive so publishes succeed
        std::mem::forget(rx);
        CodecController::new(shared, tx)
    }

    fn valid_config(order: ShOrder) -> CodecConfig {
        CodecConfig::new(
            order,
            ChannelOrder::Acn,
            Normalization::Sn3d,
            PresetId::Mic(MicArrayPreset::Ideal),
        )
    }

    #[test]
    fn test_initial_state() {
        let controller = controller();
        assert_eq!(controller.status(), CodecStatus::NotInitialised);
        assert!(controller.resolved_layout().is_none());
    }

    #[test]
    fn test_successful_reconfigure() {
        let controller = controller();
        controller
            .request_reconfigure(valid_config(ShOrder::Second))
            .unwrap();
        assert_eq!(controller.status(), CodecStatus::Initialised);
        assert_eq!(controller.resolved_layout().unwrap().channel_count(), 9);
        assert_eq!(controller.progress(), 1.0);
        assert_eq!(controller.progress_text(), "ready");
    }

    #[test]
    fn test_failed_reconfigure_keeps_previous_layout() {
        let controller = controller();
        controller
            .request_reconfigure(valid_config(ShOrder::First))
            .unwrap();
        let before = controller.resolved_layout().unwrap();

        let bad = CodecConfig::new(
            ShOrder::Second,
            ChannelOrder::Fuma,
            Normalization::Sn3d,
            PresetId::Mic(MicArrayPreset::Ideal),
        );
        assert_eq!(
            controller.request_reconfigure(bad),
            Err(ConfigError::FumaRequiresFirstOrder)
        );
        assert_eq!(controller.status(), CodecStatus::NotInitialised);
        assert_eq!(controller.resolved_layout().unwrap(), before);
    }

    #[test]
    fn test_failure_before_any_success() {
        let controller = controller();
        let bad = CodecConfig::new(
            ShOrder::Fifth,
            ChannelOrder::Acn,
            Normalization::Sn3d,
            PresetId::Mic(MicArrayPreset::Eigenmike32),
        );
        assert!(matches!(
            controller.request_reconfigure(bad),
            Err(ConfigError::ResolutionFailed(_))
        ));
        assert_eq!(controller.status(), CodecStatus::NotInitialised);
        assert!(controller.resolved_layout().is_none());
    }

    #[test]
    fn test_reentrant_reconfigure_latest_wins() {
        let controller = controller();
        controller
            .request_reconfigure(valid_config(ShOrder::First))
            .unwrap();
        controller
            .request_reconfigure(valid_config(ShOrder::Third))
            .unwrap();
        assert_eq!(controller.resolved_layout().unwrap().channel_count(), 16);
    }
}
