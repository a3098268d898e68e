// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::Error;
use qref_sim::{
    Gate,
    gate::{cphase, h, x},
};
use std::f64::consts::PI;

/// The only marked state the two-qubit oracle supports.
pub const MARKED_STATE: &str = "11";

/// One Grover iteration on two qubits, starting from `|00⟩`: uniform
/// superposition, an oracle flipping the phase of `|marked⟩`, then the
/// diffusion operator.
///
/// Only `"11"` can be marked.
pub fn grover2(marked: &str) -> Result<Vec<Gate>, Error> {
    if marked != MARKED_STATE {
        return Err(Error::UnsupportedMarkedState(marked.to_string()));
    }

    let mut gates = vec![h(0), h(1)];
    // A controlled phase of π negates |11⟩ only.
    gates.push(cphase(0, 1, PI));
    // Diffusion: reflect about the uniform superposition.
    gates.extend([h(0), h(1), x(0), x(1)]);
    gates.push(cphase(0, 1, PI));
    gates.extend([x(0), x(1), h(0), h(1)]);
    Ok(gates)
}
