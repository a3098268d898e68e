// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::Error;
use std::{fmt, str::FromStr};

pub type QubitID = usize;

/// Gate operations understood by the state-vector engine.
///
/// `Swap` is not a kernel of its own; it is applied as three `CX` gates and
/// accounted for as such by [`Gate::cost`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gate {
    H {
        target: QubitID,
    },
    X {
        target: QubitID,
    },
    Z {
        target: QubitID,
    },
    CX {
        control: QubitID,
        target: QubitID,
    },
    /// Phase `e^(i·theta)` on the states where both qubits are one.
    CPhase {
        control: QubitID,
        target: QubitID,
        theta: f64,
    },
    Swap {
        q1: QubitID,
        q2: QubitID,
    },
}

impl Gate {
    /// Number of elementary gates this operation stands for.
    #[must_use]
    pub fn cost(&self) -> usize {
        match self {
            Gate::Swap { .. } => 3,
            Gate::H { .. }
            | Gate::X { .. }
            | Gate::Z { .. }
            | Gate::CX { .. }
            | Gate::CPhase { .. } => 1,
        }
    }
}

#[must_use]
pub fn h(target: QubitID) -> Gate {
    Gate::H { target }
}

#[must_use]
pub fn x(target: QubitID) -> Gate {
    Gate::X { target }
}

#[must_use]
pub fn z(target: QubitID) -> Gate {
    Gate::Z { target }
}

#[must_use]
pub fn cx(control: QubitID, target: QubitID) -> Gate {
    Gate::CX { control, target }
}

#[must_use]
pub fn cphase(control: QubitID, target: QubitID, theta: f64) -> Gate {
    Gate::CPhase {
        control,
        target,
        theta,
    }
}

#[must_use]
pub fn swap(q1: QubitID, q2: QubitID) -> Gate {
    Gate::Swap { q1, q2 }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::H { target } => write!(f, "H {target}"),
            Gate::X { target } => write!(f, "X {target}"),
            Gate::Z { target } => write!(f, "Z {target}"),
            Gate::CX { control, target } => write!(f, "CNOT {control} {target}"),
            Gate::CPhase {
                control,
                target,
                theta,
            } => write!(f, "CPHASE {control} {target} {theta}"),
            Gate::Swap { q1, q2 } => write!(f, "SWAP {q1} {q2}"),
        }
    }
}

impl FromStr for Gate {
    type Err = Error;

    /// Parses the textual form written by [`Gate`]'s `Display` impl, e.g.
    /// `CPHASE 1 0 1.5707963267948966`. Tags are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(tag) = words.next() else {
            return Err(malformed(s, "empty operation"));
        };
        let operands: Vec<&str> = words.collect();

        let gate = match tag.to_ascii_uppercase().as_str() {
            "H" => {
                let [target] = take::<1>(s, &operands)?;
                h(qubit(s, target)?)
            }
            "X" => {
                let [target] = take::<1>(s, &operands)?;
                x(qubit(s, target)?)
            }
            "Z" => {
                let [target] = take::<1>(s, &operands)?;
                z(qubit(s, target)?)
            }
            "CNOT" | "CX" => {
                let [control, target] = take::<2>(s, &operands)?;
                cx(qubit(s, control)?, qubit(s, target)?)
            }
            "CPHASE" => {
                let [control, target, theta] = take::<3>(s, &operands)?;
                let theta = theta
                    .parse::<f64>()
                    .map_err(|e| malformed(s, format!("invalid angle `{theta}`: {e}")))?;
                cphase(qubit(s, control)?, qubit(s, target)?, theta)
            }
            "SWAP" => {
                let [q1, q2] = take::<2>(s, &operands)?;
                swap(qubit(s, q1)?, qubit(s, q2)?)
            }
            _ => return Err(Error::UnrecognizedOperation(tag.to_string())),
        };
        Ok(gate)
    }
}

/// Parses one gate per line. Blank lines and `#` comments are skipped.
pub fn parse_gates(text: &str) -> Result<Vec<Gate>, Error> {
    text.lines()
        .map(|line| line.split_once('#').map_or(line, |(code, _)| code).trim())
        .filter(|line| !line.is_empty())
        .map(str::parse)
        .collect()
}

fn take<'a, const N: usize>(text: &str, operands: &[&'a str]) -> Result<[&'a str; N], Error> {
    <[&str; N]>::try_from(operands).map_err(|_| {
        malformed(
            text,
            format!("expected {N} operands, found {}", operands.len()),
        )
    })
}

fn qubit(text: &str, operand: &str) -> Result<QubitID, Error> {
    operand
        .parse()
        .map_err(|e| malformed(text, format!("invalid qubit `{operand}`: {e}")))
}

fn malformed(text: &str, reason: impl Into<String>) -> Error {
    Error::MalformedOperation {
        text: text.trim().to_string(),
        reason: reason.into(),
    }
}
