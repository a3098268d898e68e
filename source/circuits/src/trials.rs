// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Repeated timed execution of a gate sequence.

#[cfg(test)]
mod tests;

use crate::Error;
use log::debug;
use qref_sim::{Gate, Precision, StateVector, apply_gates};
use serde::Serialize;
use std::{num::NonZeroUsize, time::Instant};

/// Wall-clock statistics over a set of trials.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrialSummary {
    /// Elementary gates applied per trial.
    pub gates: usize,
    pub repeats: usize,
    pub mean_ms: f64,
    /// Population standard deviation.
    pub std_ms: f64,
}

/// Runs `gates` `repeats` times, each time on a freshly prepared `|basis⟩`.
/// Only gate application is timed.
///
/// Returns the state left by the last trial together with the statistics.
pub fn run_trials<T: Precision>(
    num_qubits: usize,
    basis: usize,
    gates: &[Gate],
    repeats: NonZeroUsize,
) -> Result<(StateVector<T>, TrialSummary), Error> {
    let mut times = Vec::with_capacity(repeats.get());
    let (mut state, mut count) = timed_trial(num_qubits, basis, gates, &mut times)?;
    for _ in 1..repeats.get() {
        (state, count) = timed_trial(num_qubits, basis, gates, &mut times)?;
    }

    let (mean_ms, std_ms) = mean_and_std(&times);
    debug!("{} trials of {count} gates: mean {mean_ms:.6} ms, std {std_ms:.6} ms", times.len());
    let summary = TrialSummary {
        gates: count,
        repeats: times.len(),
        mean_ms,
        std_ms,
    };
    Ok((state, summary))
}

/// Runs one trial on a fresh `|basis⟩` and records its duration in `times`.
fn timed_trial<T: Precision>(
    num_qubits: usize,
    basis: usize,
    gates: &[Gate],
    times: &mut Vec<f64>,
) -> Result<(StateVector<T>, usize), Error> {
    let mut state = StateVector::new(num_qubits, basis)?;
    let start = Instant::now();
    let count = apply_gates(&mut state, gates)?;
    times.push(start.elapsed().as_secs_f64() * 1000.0);
    Ok((state, count))
}

#[allow(clippy::cast_precision_loss)]
fn mean_and_std(samples: &[f64]) -> (f64, f64) {
    let len = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / len;
    let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / len;
    (mean, variance.sqrt())
}
