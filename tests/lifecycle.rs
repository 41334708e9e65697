//! Codec lifecycle integration tests
//!
//! Exercises the controller/gate pair the way a host would: a control thread
//! reconfiguring the codec while an audio thread keeps invoking the gate.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use ambisonic_codec::{
    create_codec, AudioProcessor, ChannelLabel, ChannelOrder, CodecConfig, CodecStatus,
    ConfigError, MicArrayPreset, Normalization, PresetId, ResolvedLayout, ShOrder,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Processor that checks every layout it is handed is internally consistent
struct InvariantProcessor {
    blocks: Arc<AtomicUsize>,
    violations: Arc<AtomicUsize>,
}

fn layout_is_complete(layout: &ResolvedLayout) -> bool {
    if layout.channel_count() != layout.order.sh_channel_count() {
        return false;
    }
    let labels_ok = match layout.ordering {
        ChannelOrder::Acn => layout
            .channels
            .iter()
            .enumerate()
            .all(|(n, ch)| ch.label == ChannelLabel::Acn(n as u8)),
        ChannelOrder::Fuma => {
            layout.channel_count() == 4
                && layout.channels[0].label == ChannelLabel::FumaW
                && layout.channels[3].label == ChannelLabel::FumaZ
        }
    };
    labels_ok
        && layout
            .channels
            .iter()
            .all(|ch| ch.gain.is_finite() && ch.gain > 0.0)
}

impl AudioProcessor for InvariantProcessor {
    fn apply_layout(&mut self, layout: &ResolvedLayout) {
        if !layout_is_complete(layout) {
            self.violations.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn process(&mut self, _input: &[f32], output: &mut [f32], layout: &ResolvedLayout) {
        if !layout_is_complete(layout) {
            self.violations.fetch_add(1, Ordering::Relaxed);
        }
        self.blocks.fetch_add(1, Ordering::Relaxed);
        output.fill(1.0);
    }
}

fn ideal_config(order: ShOrder) -> CodecConfig {
    CodecConfig::new(
        order,
        ChannelOrder::Acn,
        Normalization::N3d,
        PresetId::Mic(MicArrayPreset::Ideal),
    )
}

#[test]
fn full_lifecycle_single_thread() {
    init_tracing();
    let blocks = Arc::new(AtomicUsize::new(0));
    let violations = Arc::new(AtomicUsize::new(0));
    let (controller, mut gate) = create_codec(Box::new(InvariantProcessor {
        blocks: Arc::clone(&blocks),
        violations: Arc::clone(&violations),
    }));

    let input = [0.25f32; 128];
    let mut output = [0.75f32; 128];

    // Before the first successful resolution: bypass with silence
    assert_eq!(controller.status(), CodecStatus::NotInitialised);
    assert!(controller.resolved_layout().is_none());
    gate.process_block(&input, &mut output);
    assert!(output.iter().all(|s| *s == 0.0));

    controller.request_reconfigure(ideal_config(ShOrder::First)).unwrap();
    assert_eq!(controller.status(), CodecStatus::Initialised);
    gate.process_block(&input, &mut output);
    assert!(output.iter().all(|s| *s == 1.0));
    assert_eq!(gate.active_layout().unwrap().channel_count(), 4);

    // A rejected reconfiguration drops the codec back to uninitialised:
    // the gate bypasses again, but the last good layout is retained
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
    assert_eq!(controller.resolved_layout().unwrap().channel_count(), 4);
    gate.process_block(&input, &mut output);
    assert!(output.iter().all(|s| *s == 0.0));

    // Recovery with a valid configuration
    controller.request_reconfigure(ideal_config(ShOrder::Third)).unwrap();
    gate.process_block(&input, &mut output);
    assert!(output.iter().all(|s| *s == 1.0));
    assert_eq!(gate.active_layout().unwrap().channel_count(), 16);

    assert_eq!(violations.load(Ordering::Relaxed), 0);
    assert!(blocks.load(Ordering::Relaxed) >= 2);
}

#[test]
fn concurrent_reconfiguration_never_exposes_partial_layout() {
    init_tracing();
    let blocks = Arc::new(AtomicUsize::new(0));
    let violations = Arc::new(AtomicUsize::new(0));
    let (controller, mut gate) = create_codec(Box::new(InvariantProcessor {
        blocks: Arc::clone(&blocks),
        violations: Arc::clone(&violations),
    }));

    let stop = Arc::new(AtomicBool::new(false));
    let audio_stop = Arc::clone(&stop);
    let audio = thread::spawn(move || {
        let input = [0.0f32; 64];
        let mut output = [0.0f32; 64];
        while !audio_stop.load(Ordering::Relaxed) {
            gate.process_block(&input, &mut output);
        }
        gate
    });

    for round in 0..200u32 {
        let order = ShOrder::ALL[(round % 7) as usize];
        controller.request_reconfigure(ideal_config(order)).unwrap();

        if round % 5 == 0 {
            // Interleave rejected requests; the audio thread must keep
            // running undisturbed through the failure window
            let bad = CodecConfig::new(
                ShOrder::Fourth,
                ChannelOrder::Acn,
                Normalization::Fuma,
                PresetId::Mic(MicArrayPreset::Ideal),
            );
            assert_eq!(
                controller.request_reconfigure(bad),
                Err(ConfigError::FumaRequiresFirstOrder)
            );
        }
    }

    // Leave the codec in a known-good state and give the audio thread a
    // moment to process against it
    controller.request_reconfigure(ideal_config(ShOrder::Second)).unwrap();
    thread::sleep(Duration::from_millis(20));
    stop.store(true, Ordering::Relaxed);
    let gate = audio.join().expect("audio thread panicked");

    assert_eq!(violations.load(Ordering::Relaxed), 0);
    assert!(blocks.load(Ordering::Relaxed) > 0, "audio thread never processed");
    assert_eq!(gate.active_layout().unwrap().channel_count(), 9);
    assert_eq!(controller.status(), CodecStatus::Initialised);
}

#[test]
fn reconfigure_works_with_gate_dropped() {
    init_tracing();
    let (controller, gate) = create_codec(Box::new(InvariantProcessor {
        blocks: Arc::new(AtomicUsize::new(0)),
        violations: Arc::new(AtomicUsize::new(0)),
    }));
    drop(gate);

    // No audio side at all: the controller still resolves and reports
    controller.request_reconfigure(ideal_config(ShOrder::Seventh)).unwrap();
    assert_eq!(controller.status(), CodecStatus::Initialised);
    assert_eq!(controller.resolved_layout().unwrap().channel_count(), 64);
}
