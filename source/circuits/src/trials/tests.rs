// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::*;
use crate::qft;
use qref_sim::gate::{cx, h};

fn repeats(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("repeat count should be non-zero")
}

#[test]
fn summary_reports_gate_count_and_repeats() {
    let (state, summary) =
        run_trials::<f32>(4, 0, &qft(4), repeats(5)).expect("trials should run");
    assert_eq!(summary.gates, 16);
    assert_eq!(summary.repeats, 5);
    assert!(summary.mean_ms >= 0.0);
    assert!(summary.std_ms >= 0.0);
    assert_eq!(state.num_qubits(), 4);
}

#[test]
fn every_trial_starts_from_a_fresh_state() {
    let gates = [h(0), cx(0, 1)];
    let (state, _) = run_trials::<f64>(2, 0, &gates, repeats(3)).expect("trials should run");
    let (single, _) = run_trials::<f64>(2, 0, &gates, repeats(1)).expect("trials should run");
    assert_eq!(state, single);
}

#[test]
fn failing_sequence_is_reported() {
    let result = run_trials::<f64>(2, 0, &[h(2)], repeats(3));
    assert_eq!(
        result.map(|(_, summary)| summary.gates),
        Err(Error::Simulation(qref_sim::Error::QubitOutOfRange {
            qubit: 2,
            num_qubits: 2
        }))
    );
}

#[test]
fn mean_and_std_are_population_statistics() {
    let (mean, std) = mean_and_std(&[1.0, 2.0, 3.0, 4.0]);
    assert!((mean - 2.5).abs() < 1e-12);
    assert!((std - 1.25_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn timed_trial_records_one_duration_per_call() {
    let mut times = Vec::new();
    for expected in 1..=3 {
        let (state, count) =
            timed_trial::<f64>(2, 1, &[cx(0, 1)], &mut times).expect("trial should run");
        assert_eq!(count, 1);
        assert_eq!(state, StateVector::new(2, 3).expect("state should be valid"));
        assert_eq!(times.len(), expected);
    }
    assert!(times.iter().all(|&t| t >= 0.0));
}
