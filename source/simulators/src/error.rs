// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Clone, Debug, Diagnostic, Error, PartialEq)]
pub enum Error {
    #[error("a state vector needs at least one qubit")]
    #[diagnostic(code("Qref.Sim.NoQubits"))]
    NoQubits,

    #[error("{0} qubits exceed the dense state-vector limit of {max}", max = crate::MAX_QUBITS)]
    #[diagnostic(code("Qref.Sim.TooManyQubits"))]
    TooManyQubits(usize),

    #[error("basis index {basis} is out of range for {num_qubits} qubits")]
    #[diagnostic(code("Qref.Sim.BasisOutOfRange"))]
    BasisOutOfRange { basis: usize, num_qubits: usize },

    #[error("qubit {qubit} is out of range for {num_qubits} qubits")]
    #[diagnostic(code("Qref.Sim.QubitOutOfRange"))]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    #[error("control and target must differ, both are qubit {0}")]
    #[diagnostic(code("Qref.Sim.ControlIsTarget"))]
    ControlIsTarget(usize),

    #[error("unrecognized operation `{0}`")]
    #[diagnostic(code("Qref.Sim.UnrecognizedOperation"))]
    #[diagnostic(help("supported operations are H, X, Z, CNOT, CPHASE and SWAP"))]
    UnrecognizedOperation(String),

    #[error("malformed operation `{text}`: {reason}")]
    #[diagnostic(code("Qref.Sim.MalformedOperation"))]
    MalformedOperation { text: String, reason: String },

    #[error("amplitude vectors differ in length: {left} and {right}")]
    #[diagnostic(code("Qref.Sim.LengthMismatch"))]
    LengthMismatch { left: usize, right: usize },

    #[error("malformed amplitude record on line {line}: {reason}")]
    #[diagnostic(code("Qref.Sim.MalformedRecord"))]
    #[diagnostic(help("records are written as `index,re,im` after an `index,re,im` header"))]
    MalformedRecord { line: usize, reason: String },
}
