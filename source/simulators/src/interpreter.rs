// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{Error, Gate, Precision, StateVector};
use log::{debug, trace};

/// Applies `gates` to `state` in order and returns the elementary gate count,
/// where every `Swap` counts as three.
///
/// Stops at the first gate that fails. Gates applied before it are not
/// rolled back.
pub fn apply_gates<T: Precision>(
    state: &mut StateVector<T>,
    gates: &[Gate],
) -> Result<usize, Error> {
    let mut count = 0;
    for gate in gates {
        trace!("applying {gate}");
        state.apply(gate)?;
        count += gate.cost();
    }
    debug!(
        "applied {} operations ({count} elementary gates) on {} qubits",
        gates.len(),
        state.num_qubits()
    );
    Ok(count)
}

/// Prepares `|basis⟩` on `num_qubits` qubits and runs `gates` on it.
pub fn run<T: Precision>(
    num_qubits: usize,
    basis: usize,
    gates: &[Gate],
) -> Result<(StateVector<T>, usize), Error> {
    let mut state = StateVector::new(num_qubits, basis)?;
    let count = apply_gates(&mut state, gates)?;
    Ok((state, count))
}
