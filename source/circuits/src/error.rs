// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Clone, Debug, Diagnostic, Error, PartialEq)]
pub enum Error {
    #[error("marked state |{0}⟩ is not supported")]
    #[diagnostic(code("Qref.Circuits.UnsupportedMarkedState"))]
    #[diagnostic(help("the two-qubit Grover oracle only marks |11⟩"))]
    UnsupportedMarkedState(String),

    #[error("marked index {marked} is out of range for {num_qubits} qubits")]
    #[diagnostic(code("Qref.Circuits.MarkedOutOfRange"))]
    MarkedOutOfRange { marked: usize, num_qubits: usize },

    #[error("unknown program `{0}`")]
    #[diagnostic(code("Qref.Circuits.UnknownProgram"))]
    #[diagnostic(help("expected `qft<N>` with N ≥ 1, `grover<N>` with N ≥ 2, or `bell2`"))]
    UnknownProgram(String),

    #[error("program `{0}` has no generated gate sequence")]
    #[diagnostic(code("Qref.Circuits.NoGateSequence"))]
    #[diagnostic(help("supply a gate listing for it with `--gates`"))]
    NoGateSequence(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Simulation(#[from] qref_sim::Error),
}
