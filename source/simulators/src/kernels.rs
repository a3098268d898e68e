// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! In-place gate kernels over a dense amplitude slice.
//!
//! Kernels only look at bit positions. Callers are expected to have checked
//! every qubit index against the register width before calling in, which
//! [`crate::StateVector`] does once per gate.


use crate::Precision;
use num_complex::Complex;

/// Visits every pair of amplitudes whose indices differ only in the `target` bit,
/// lower index first.
fn for_each_pair<A>(amplitudes: &mut [A], target: usize, mut f: impl FnMut(&mut A, &mut A)) {
    let step = 1 << target;
    for block in amplitudes.chunks_exact_mut(step << 1) {
        let (zeros, ones) = block.split_at_mut(step);
        for (a0, a1) in zeros.iter_mut().zip(ones) {
            f(a0, a1);
        }
    }
}

pub(crate) fn h<T: Precision>(amplitudes: &mut [Complex<T>], target: usize) {
    let f = T::FRAC_1_SQRT_2();
    for_each_pair(amplitudes, target, |a0, a1| {
        let (a, b) = (*a0, *a1);
        *a0 = (a + b).scale(f);
        *a1 = (a - b).scale(f);
    });
}

pub(crate) fn x<T: Precision>(amplitudes: &mut [Complex<T>], target: usize) {
    for_each_pair(amplitudes, target, std::mem::swap);
}

pub(crate) fn z<T: Precision>(amplitudes: &mut [Complex<T>], target: usize) {
    for_each_pair(amplitudes, target, |_, a1| *a1 = -*a1);
}

/// Flips `target` on every basis state where `control` is set.
/// Each pair is swapped once, from its lower index.
pub(crate) fn cx<T: Precision>(amplitudes: &mut [Complex<T>], control: usize, target: usize) {
    debug_assert_ne!(control, target, "control and target should differ");
    let control_mask = 1 << control;
    let target_mask = 1 << target;
    for index in 0..amplitudes.len() {
        if index & control_mask == 0 {
            continue;
        }
        let flipped = index ^ target_mask;
        if flipped > index {
            amplitudes.swap(index, flipped);
        }
    }
}

/// Multiplies every amplitude with both `control` and `target` set by `phase`.
pub(crate) fn cphase<T: Precision>(
    amplitudes: &mut [Complex<T>],
    control: usize,
    target: usize,
    phase: Complex<T>,
) {
    let mask = (1 << control) | (1 << target);
    for (index, amplitude) in amplitudes.iter_mut().enumerate() {
        if index & mask == mask {
            *amplitude *= phase;
        }
    }
}

/// Exchanges `q1` and `q2` as CX(q1, q2) CX(q2, q1) CX(q1, q2).
pub(crate) fn swap<T: Precision>(amplitudes: &mut [Complex<T>], q1: usize, q2: usize) {
    if q1 == q2 {
        return;
    }
    cx(amplitudes, q1, q2);
    cx(amplitudes, q2, q1);
    cx(amplitudes, q1, q2);
}
