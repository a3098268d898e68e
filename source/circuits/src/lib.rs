// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

mod error;
pub mod grover;
pub mod program;
pub mod qft;
pub mod reference;
pub mod trials;

pub use error::Error;
pub use grover::grover2;
pub use program::Program;
pub use qft::qft;

use qref_sim::{
    Gate,
    gate::{cx, h},
};

/// Prepares `(|00⟩ + |11⟩)/√2` from `|00⟩`.
#[must_use]
pub fn bell_pair() -> Vec<Gate> {
    vec![h(0), cx(0, 1)]
}
