// tests/denoise_pipeline_tests.rs
//! End-to-end denoising scenarios
//!
//! - a clean tone is kept whole
//! - a noisy tone loses its fastest modes
//! - constant input is degenerate
//! - a monotonic ramp passes through unchanged

use emd_denoise::processing::{normalize, reconstruct, ModeDecomposer};
use emd_denoise::simulation::{SignalSimulator, Tone};
use emd_denoise::utils::stats;
use emd_denoise::{DenoiseConfig, DenoiseError, DenoiseOutcome, EmdDenoiser, ProcessingStage, Signal};

#[test]
fn test_clean_sine_is_kept() {
    let input = SignalSimulator::new(128).with_tone(Tone::new(4.0, 1.0)).generate();
    let denoiser = EmdDenoiser::default();

    let report = denoiser.denoise_samples(&input).unwrap();
    assert_eq!(report.outcome, DenoiseOutcome::Denoised);
    assert_eq!(report.mode_count, 1);
    assert_eq!(report.cutoff, 0);

    let (normalized, _) = normalize(&Signal::new(input).unwrap()).unwrap();
    assert!(stats::max_abs_diff(&report.output, &normalized) < 1e-9);
}

#[test]
fn test_clean_sine_decomposes_to_one_mode() {
    let input = SignalSimulator::new(128).with_tone(Tone::new(4.0, 1.0)).generate();
    let (normalized, _) = normalize(&Signal::new(input).unwrap()).unwrap();

    let modes = ModeDecomposer::default().decompose(&normalized).unwrap();
    assert_eq!(modes.mode_count(), 1);
    assert!(stats::range(modes.residue()) < 1e-9);
}

#[test]
fn test_noisy_sine_drops_fast_modes() {
    let simulator = SignalSimulator::new(128)
        .with_tone(Tone::new(3.0, 1.0))
        .with_noise(0.5, 2024);
    let input = simulator.generate();

    let report = EmdDenoiser::default().denoise_samples(&input).unwrap();
    assert_eq!(report.outcome, DenoiseOutcome::Denoised);
    assert!(report.mode_count >= 2, "mode_count={}", report.mode_count);
    assert!(report.cutoff > 0, "scores={:?}", report.scores);
    assert!(report.scores[0] > report.scores[report.cutoff]);

    let normalized = report.normalization.apply(&input);
    assert!(
        stats::total_variation(&report.output) < stats::total_variation(&normalized),
        "denoised output should vary less than the input"
    );
}

#[test]
fn test_constant_input_is_degenerate() {
    let err = EmdDenoiser::default().denoise_samples(&[2.5; 64]).unwrap_err();
    assert!(matches!(err, DenoiseError::DegenerateSignal { len: 64, .. }));
    assert_eq!(err.stage(), Some(ProcessingStage::Normalization));
    assert!(err.is_data_quality());
}

#[test]
fn test_large_constant_is_degenerate() {
    for value in [123456.789, 98765.4321, 1e7 + 0.1] {
        let err = EmdDenoiser::default().denoise_samples(&vec![value; 1000]).unwrap_err();
        assert!(
            matches!(err, DenoiseError::DegenerateSignal { len: 1000, .. }),
            "value {}: {:?}",
            value,
            err
        );
    }
}

#[test]
fn test_tiny_amplitude_sine_is_denoised() {
    let input = SignalSimulator::new(128).with_tone(Tone::new(4.0, 1e-13)).generate();
    let report = EmdDenoiser::default().denoise_samples(&input).unwrap();

    assert_eq!(report.outcome, DenoiseOutcome::Denoised);
    assert_eq!(report.mode_count, 1);
    assert!((stats::std_dev(&report.output) - 1.0).abs() < 1e-9);
}

#[test]
fn test_monotonic_ramp_passes_through() {
    let ramp: Vec<f64> = (0..128).map(|i| 0.25 * i as f64 + 1.0).collect();

    let (normalized, _) = normalize(&Signal::from_slice(&ramp).unwrap()).unwrap();
    assert!(matches!(
        ModeDecomposer::default().decompose(&normalized),
        Err(DenoiseError::DecompositionFailure { .. })
    ));

    let report = EmdDenoiser::default().denoise_samples(&ramp).unwrap();
    assert_eq!(report.outcome, DenoiseOutcome::Passthrough);
    assert_eq!(report.output.as_slice(), ramp.as_slice());
}

#[test]
fn test_short_input_rejected_before_decomposition() {
    let err = EmdDenoiser::default().denoise_samples(&[0.0, 1.0, 0.0]).unwrap_err();
    assert!(matches!(
        err,
        DenoiseError::InvalidInput { stage: ProcessingStage::Validation, .. }
    ));
}

#[test]
fn test_non_finite_input_rejected() {
    let mut input = SignalSimulator::new(32).with_tone(Tone::new(2.0, 1.0)).generate();
    input[7] = f64::INFINITY;
    let err = EmdDenoiser::default().denoise_samples(&input).unwrap_err();
    assert!(err.to_string().contains("index 7"));
}

#[test]
fn test_output_matches_manual_stages() {
    let input = SignalSimulator::new(200)
        .with_tone(Tone::new(5.0, 1.0))
        .with_tone(Tone::new(37.0, 0.3))
        .with_offset(2.0)
        .with_noise(0.1, 5)
        .generate();
    let report = EmdDenoiser::default().denoise_samples(&input).unwrap();

    let (normalized, _) = normalize(&Signal::from_slice(&input).unwrap()).unwrap();
    let modes = ModeDecomposer::default().decompose(&normalized).unwrap();
    let manual = reconstruct(&modes, report.cutoff).unwrap();

    assert_eq!(report.mode_count, modes.mode_count());
    assert_eq!(report.output, manual);
}

#[test]
fn test_restore_scale_keeps_units() {
    let input = SignalSimulator::new(128)
        .with_tone(Tone::new(4.0, 5.0))
        .with_offset(20.0)
        .generate();
    let config = DenoiseConfig { restore_scale: true, ..DenoiseConfig::default() };

    let report = EmdDenoiser::new(config).unwrap().denoise_samples(&input).unwrap();
    assert!((stats::mean(&report.output) - 20.0).abs() < 1e-6);
    assert!(stats::max_abs_diff(&report.output, &input) < 1e-6);
}

#[test]
fn test_batch_preserves_order_and_errors() {
    let inputs = vec![
        SignalSimulator::new(96).with_tone(Tone::new(3.0, 1.0)).with_noise(0.3, 1).generate(),
        vec![0.0; 2],
        vec![7.0; 32],
        (0..64).map(|i| i as f64).collect(),
    ];
    let results = EmdDenoiser::default().denoise_batch(&inputs);

    assert_eq!(results.len(), 4);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(DenoiseError::InvalidInput { .. })));
    assert!(matches!(results[2], Err(DenoiseError::DegenerateSignal { .. })));
    assert_eq!(results[3].as_ref().unwrap().outcome, DenoiseOutcome::Passthrough);
}
