// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::*;
use crate::reference::qft_state;
use expect_test::expect;
use num_complex::Complex64;
use qref_sim::{compare::fidelity, run};
use std::f64::consts::FRAC_1_SQRT_2;

fn listing(gates: &[Gate]) -> String {
    gates.iter().map(|g| format!("{g}\n")).collect()
}

#[test]
fn qft_gate_order_for_three_qubits() {
    expect![[r#"
        H 0
        CPHASE 1 0 1.5707963267948966
        CPHASE 2 0 0.7853981633974483
        H 1
        CPHASE 2 1 1.5707963267948966
        H 2
        SWAP 0 2
    "#]]
    .assert_eq(&listing(&qft(3)));
}

#[test]
fn qft_four_qubits_reverses_with_two_swaps() {
    let gates = qft(4);
    assert_eq!(gates.len(), 4 + 6 + 2);
    assert_eq!(&gates[10..], &[swap(0, 3), swap(1, 2)]);
    assert_eq!(gates[3], cphase(3, 0, std::f64::consts::PI / 8.0));
}

#[test]
fn qft_of_zero_qubits_is_empty() {
    assert!(qft(0).is_empty());
}

#[test]
fn qft_one_qubit_on_zero_is_plus() {
    let (state, count) = run::<f64>(1, 0, &qft(1)).expect("qft should run");
    assert_eq!(count, 1);
    let [a0, a1] = state.amplitudes() else {
        panic!("one qubit should have two amplitudes");
    };
    assert!((a0 - Complex64::new(FRAC_1_SQRT_2, 0.0)).norm() < 1e-9);
    assert!((a1 - Complex64::new(FRAC_1_SQRT_2, 0.0)).norm() < 1e-9);
}

#[test]
fn qft_three_qubits_on_zero_is_uniform() {
    let (state, count) = run::<f64>(3, 0, &qft(3)).expect("qft should run");
    assert_eq!(count, 3 + 3 + 3);
    let expected = 1.0 / 8.0_f64.sqrt();
    for a in state.amplitudes() {
        assert!((a.norm() - expected).abs() < 1e-9);
        assert!((a - Complex64::new(expected, 0.0)).norm() < 1e-9);
    }
}

#[test]
fn qft_matches_closed_form_on_every_basis_state() {
    for num_qubits in 1..=5 {
        let gates = qft(num_qubits);
        for basis in 0..1 << num_qubits {
            let (state, _) = run::<f64>(num_qubits, basis, &gates).expect("qft should run");
            let expected = qft_state(num_qubits, basis).expect("reference should exist");
            for (a, e) in state.amplitudes().iter().zip(&expected) {
                assert!(
                    (a - e).norm() < 1e-9,
                    "qft{num_qubits} |{basis}⟩: expected {e}, got {a}"
                );
            }
        }
    }
}

#[test]
fn single_precision_qft_stays_close_to_reference() {
    let (state, _) = run::<f32>(6, 5, &qft(6)).expect("qft should run");
    let expected = qft_state(6, 5).expect("reference should exist");
    let fid = fidelity(&state.to_complex64(), &expected).expect("lengths should match");
    assert!((fid - 1.0).abs() < 1e-5);
}
