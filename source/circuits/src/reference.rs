// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Closed-form ideal amplitudes for the generated circuits, in double
//! precision and LSB-first index order.

#[cfg(test)]
mod tests;

use crate::Error;
use num_complex::Complex64;
use qref_sim::{MAX_QUBITS, compare::bit_reverse};
use std::f64::consts::{FRAC_1_SQRT_2, TAU};

/// The state [`crate::qft`] produces from `|basis⟩`.
///
/// The generated transform treats qubit 0 as the most significant digit of
/// both its input and its output, so with `rev` reversing the `n` index bits
/// the amplitude of `|m⟩` is `e^(2πi·rev(basis)·rev(m)/2^n) / √2^n`.
/// For `|0⟩` this is the uniform superposition.
#[allow(clippy::cast_precision_loss)]
pub fn qft_state(num_qubits: usize, basis: usize) -> Result<Vec<Complex64>, Error> {
    let dim = dimension(num_qubits)?;
    if basis >= dim {
        return Err(qref_sim::Error::BasisOutOfRange { basis, num_qubits }.into());
    }
    let input = bit_reverse(basis, num_qubits);
    let scale = 1.0 / (dim as f64).sqrt();
    Ok((0..dim)
        .map(|m| {
            let turns = (input * bit_reverse(m, num_qubits)) % dim;
            Complex64::from_polar(scale, TAU * turns as f64 / dim as f64)
        })
        .collect())
}

/// The normalized state after one Grover iteration on `num_qubits` qubits,
/// starting from `|0…0⟩`. `marked` defaults to the last basis state.
#[allow(clippy::cast_precision_loss)]
pub fn grover_state(num_qubits: usize, marked: Option<usize>) -> Result<Vec<Complex64>, Error> {
    let dim = dimension(num_qubits)?;
    let marked = marked.unwrap_or(dim - 1);
    if marked >= dim {
        return Err(Error::MarkedOutOfRange { marked, num_qubits });
    }

    let mut state = vec![Complex64::new(1.0 / (dim as f64).sqrt(), 0.0); dim];
    state[marked] = -state[marked];
    let mean = state.iter().sum::<Complex64>() / dim as f64;
    for a in &mut state {
        *a = mean * 2.0 - *a;
    }
    qref_sim::compare::normalize(&mut state);
    Ok(state)
}

/// `(|00⟩ + |11⟩)/√2`.
#[must_use]
pub fn bell_state() -> Vec<Complex64> {
    let mut state = vec![Complex64::new(0.0, 0.0); 4];
    state[0] = Complex64::new(FRAC_1_SQRT_2, 0.0);
    state[3] = Complex64::new(FRAC_1_SQRT_2, 0.0);
    state
}

fn dimension(num_qubits: usize) -> Result<usize, Error> {
    match num_qubits {
        0 => Err(qref_sim::Error::NoQubits.into()),
        n if n > MAX_QUBITS => Err(qref_sim::Error::TooManyQubits(n).into()),
        n => Ok(1 << n),
    }
}
