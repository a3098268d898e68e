// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::*;
use crate::bell_pair;
use qref_sim::{
    compare::{fidelity, norm},
    run,
};

fn assert_close(actual: &[Complex64], expected: &[Complex64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).norm() < 1e-12, "expected {e}, got {a}");
    }
}

#[test]
fn qft_of_zero_is_uniform() {
    for num_qubits in 1..=4 {
        let state = qft_state(num_qubits, 0).expect("reference should exist");
        let expected = 1.0 / f64::from(1_u32 << num_qubits).sqrt();
        assert_close(&state, &vec![Complex64::new(expected, 0.0); 1 << num_qubits]);
    }
}

#[test]
fn qft_of_one_on_two_qubits() {
    // |01⟩ reads as 2 with qubit 0 most significant, giving phases (−1)^rev(m).
    let state = qft_state(2, 1).expect("reference should exist");
    let expected = [0.5, 0.5, -0.5, -0.5].map(|re| Complex64::new(re, 0.0));
    assert_close(&state, &expected);
}

#[test]
fn qft_states_are_normalized() {
    for basis in 0..16 {
        let state = qft_state(4, basis).expect("reference should exist");
        assert!((norm(&state) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn qft_state_rejects_invalid_arguments() {
    assert_eq!(
        qft_state(0, 0),
        Err(Error::Simulation(qref_sim::Error::NoQubits))
    );
    assert_eq!(
        qft_state(2, 4),
        Err(Error::Simulation(qref_sim::Error::BasisOutOfRange {
            basis: 4,
            num_qubits: 2
        }))
    );
}

#[test]
fn grover_two_qubits_finds_marked_state() {
    let state = grover_state(2, None).expect("reference should exist");
    let expected = [0.0, 0.0, 0.0, 1.0].map(|re| Complex64::new(re, 0.0));
    assert_close(&state, &expected);

    let state = grover_state(2, Some(1)).expect("reference should exist");
    let expected = [0.0, 1.0, 0.0, 0.0].map(|re| Complex64::new(re, 0.0));
    assert_close(&state, &expected);
}

#[test]
fn grover_three_qubits_peaks_at_marked_state() {
    let state = grover_state(3, None).expect("reference should exist");
    assert!((norm(&state) - 1.0).abs() < 1e-12);
    // Amplitude 5/(4√2) on the marked state, 1/(4√2) elsewhere.
    let peak = 5.0 / (4.0 * 2.0_f64.sqrt());
    assert!((state[7].re - peak).abs() < 1e-12);
    for a in &state[..7] {
        assert!((a.re - peak / 5.0).abs() < 1e-12);
    }
}

#[test]
fn grover_rejects_marked_index_out_of_range() {
    assert_eq!(
        grover_state(2, Some(4)),
        Err(Error::MarkedOutOfRange {
            marked: 4,
            num_qubits: 2
        })
    );
}

#[test]
fn bell_pair_produces_bell_state() {
    let (state, count) = run::<f64>(2, 0, &bell_pair()).expect("bell pair should run");
    assert_eq!(count, 2);
    let fid = fidelity(&state.to_complex64(), &bell_state()).expect("lengths should match");
    assert!((fid - 1.0).abs() < 1e-12);
    assert_close(&state.to_complex64(), &bell_state());
}
