// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#[cfg(test)]
mod tests;

use qref_sim::{
    Gate,
    gate::{cphase, h, swap},
};
use std::f64::consts::FRAC_PI_2;

/// Quantum Fourier transform on `num_qubits` qubits, qubit 0 being the least
/// significant bit.
///
/// Each qubit `j` gets an `H` followed by controlled phases of `π/2^(k−j)`
/// from every higher qubit `k`. Trailing swaps undo the bit reversal so the
/// output comes out in natural index order.
#[must_use]
pub fn qft(num_qubits: usize) -> Vec<Gate> {
    let mut gates = Vec::with_capacity(num_qubits * (num_qubits + 1) / 2 + num_qubits / 2);
    for j in 0..num_qubits {
        gates.push(h(j));
        // Halving is exact in binary floating point.
        let mut theta = FRAC_PI_2;
        for k in j + 1..num_qubits {
            gates.push(cphase(k, j, theta));
            theta /= 2.0;
        }
    }
    for j in 0..num_qubits / 2 {
        gates.push(swap(j, num_qubits - 1 - j));
    }
    gates
}
