// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{Error, bell_pair, grover::MARKED_STATE, grover2, qft, reference};
use num_complex::Complex64;
use qref_sim::Gate;
use std::{fmt, str::FromStr};

/// A named benchmark program shared with the hardware runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Program {
    /// `qft<N>`: the quantum Fourier transform on `N` qubits.
    Qft { num_qubits: usize },
    /// `grover<N>`: one Grover iteration on `N ≥ 2` qubits marking the last
    /// basis state. Only `grover2` has a generated gate sequence.
    Grover { num_qubits: usize },
    /// `bell2`: a Bell pair.
    Bell2,
}

impl Program {
    #[must_use]
    pub fn num_qubits(self) -> usize {
        match self {
            Program::Qft { num_qubits } | Program::Grover { num_qubits } => num_qubits,
            Program::Bell2 => 2,
        }
    }

    /// The generated gate sequence. Grover programs wider than two qubits
    /// have none and need a gate listing supplied from outside.
    pub fn gates(self) -> Result<Vec<Gate>, Error> {
        match self {
            Program::Qft { num_qubits } => Ok(qft(num_qubits)),
            Program::Grover { num_qubits: 2 } => grover2(MARKED_STATE),
            Program::Grover { .. } => Err(Error::NoGateSequence(self.to_string())),
            Program::Bell2 => Ok(bell_pair()),
        }
    }

    /// The state the program should produce from `|0…0⟩`, including the
    /// global phase of the generated gates so that L2 errors stay meaningful.
    pub fn ideal_state(self) -> Result<Vec<Complex64>, Error> {
        match self {
            Program::Qft { num_qubits } => reference::qft_state(num_qubits, 0),
            Program::Grover { num_qubits: 2 } => {
                // The gate-level diffusion is the reflection about the mean
                // times −1.
                let mut state = reference::grover_state(2, None)?;
                for a in &mut state {
                    *a = -*a;
                }
                Ok(state)
            }
            Program::Grover { num_qubits } => reference::grover_state(num_qubits, None),
            Program::Bell2 => Ok(reference::bell_state()),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Program::Qft { num_qubits } => write!(f, "qft{num_qubits}"),
            Program::Grover { num_qubits } => write!(f, "grover{num_qubits}"),
            Program::Bell2 => write!(f, "bell2"),
        }
    }
}

impl FromStr for Program {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let program = if s == "bell2" {
            Some(Program::Bell2)
        } else if let Some(digits) = s.strip_prefix("qft") {
            width(digits, 1).map(|num_qubits| Program::Qft { num_qubits })
        } else if let Some(digits) = s.strip_prefix("grover") {
            width(digits, 2).map(|num_qubits| Program::Grover { num_qubits })
        } else {
            None
        };
        program.ok_or_else(|| Error::UnknownProgram(s.to_string()))
    }
}

/// Parses a plain decimal qubit count of at least `min`.
fn width(digits: &str, min: usize) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<usize>().ok().filter(|&num_qubits| num_qubits >= min)
}
