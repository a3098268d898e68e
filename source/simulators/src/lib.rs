// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

pub mod compare;
mod error;
pub mod gate;
pub mod interpreter;
mod kernels;
mod state_vector;

pub use error::Error;
pub use gate::{Gate, QubitID};
pub use interpreter::{apply_gates, run};
pub use state_vector::{MAX_QUBITS, Precision, StateVector};
