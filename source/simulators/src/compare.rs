// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Comparison of computed amplitudes against a reference, and the
//! `index,re,im` text records used to exchange amplitude vectors with
//! hardware simulation runs.


use crate::{Error, MAX_QUBITS, Precision};
use num_complex::{Complex, Complex64};
use std::fmt::Write;

const HEADER: &str = "index,re,im";

/// Order in which an exchanged record numbers its qubits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BitOrder {
    /// Qubit 0 is the least significant bit of the index.
    #[default]
    LsbFirst,
    /// Qubit 0 is the most significant bit of the index.
    MsbFirst,
}

/// `|⟨a|b⟩|²`. Both vectors are assumed to be normalized.
pub fn fidelity(a: &[Complex64], b: &[Complex64]) -> Result<f64, Error> {
    check_lengths(a, b)?;
    let inner: Complex64 = a.iter().zip(b).map(|(a, b)| a.conj() * b).sum();
    Ok(inner.norm_sqr())
}

/// `‖a − b‖`.
pub fn l2_error(a: &[Complex64], b: &[Complex64]) -> Result<f64, Error> {
    check_lengths(a, b)?;
    Ok(a.iter()
        .zip(b)
        .map(|(a, b)| (a - b).norm_sqr())
        .sum::<f64>()
        .sqrt())
}

#[must_use]
pub fn norm(amplitudes: &[Complex64]) -> f64 {
    amplitudes.iter().map(Complex64::norm_sqr).sum::<f64>().sqrt()
}

/// Scales `amplitudes` to unit norm. The zero vector is left untouched.
pub fn normalize(amplitudes: &mut [Complex64]) {
    let norm = norm(amplitudes);
    if norm > 0.0 {
        for a in amplitudes {
            *a /= norm;
        }
    }
}

/// Reverses the low `num_bits` bits of `index`.
#[must_use]
pub fn bit_reverse(index: usize, num_bits: usize) -> usize {
    (0..num_bits).fold(0, |reversed, bit| (reversed << 1) | ((index >> bit) & 1))
}

/// Parses amplitude records into a normalized LSB-first vector.
///
/// The first line must be the `index,re,im` header. When `num_qubits` is not
/// given it is the smallest width (at least one) that holds the largest index.
/// Indices never written are zero. An explicit width of zero is rejected.
pub fn parse_amplitudes(
    text: &str,
    order: BitOrder,
    num_qubits: Option<usize>,
) -> Result<Vec<Complex64>, Error> {
    if num_qubits == Some(0) {
        return Err(Error::NoQubits);
    }
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((line, header)) = lines.next() else {
        return Ok(Vec::new());
    };
    if header != HEADER {
        return Err(Error::MalformedRecord {
            line,
            reason: format!("expected header `{HEADER}`, found `{header}`"),
        });
    }

    let records = lines
        .map(|(line, record)| parse_record(line, record).map(|r| (line, r)))
        .collect::<Result<Vec<_>, _>>()?;
    let Some(max_index) = records.iter().map(|(_, (index, _))| *index).max() else {
        return Ok(Vec::new());
    };

    let num_qubits = num_qubits.unwrap_or_else(|| bits_for(max_index).max(1));
    if num_qubits > MAX_QUBITS {
        return Err(Error::TooManyQubits(num_qubits));
    }
    let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
    for (line, (index, amplitude)) in records {
        if index >= amplitudes.len() {
            return Err(Error::MalformedRecord {
                line,
                reason: format!("index {index} is out of range for {num_qubits} qubits"),
            });
        }
        let index = match order {
            BitOrder::LsbFirst => index,
            BitOrder::MsbFirst => bit_reverse(index, num_qubits),
        };
        amplitudes[index] = amplitude;
    }

    normalize(&mut amplitudes);
    Ok(amplitudes)
}

/// Writes amplitudes as `index,re,im` records, header first.
#[must_use]
pub fn format_amplitudes<T: Precision>(amplitudes: &[Complex<T>]) -> String {
    let mut out = String::new();
    writeln!(out, "{HEADER}").expect("writing to a string should succeed");
    for (index, a) in amplitudes.iter().enumerate() {
        writeln!(out, "{index},{},{}", a.re, a.im).expect("writing to a string should succeed");
    }
    out
}

fn parse_record(line: usize, record: &str) -> Result<(usize, Complex64), Error> {
    let malformed = |reason: String| Error::MalformedRecord { line, reason };
    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    let [index, re, im] = fields[..] else {
        return Err(malformed(format!(
            "expected 3 fields, found {}",
            fields.len()
        )));
    };
    let index = index
        .parse::<usize>()
        .map_err(|e| malformed(format!("invalid index `{index}`: {e}")))?;
    let re = re
        .parse::<f64>()
        .map_err(|e| malformed(format!("invalid real part `{re}`: {e}")))?;
    let im = im
        .parse::<f64>()
        .map_err(|e| malformed(format!("invalid imaginary part `{im}`: {e}")))?;
    Ok((index, Complex64::new(re, im)))
}

/// Number of bits needed to write `value`.
fn bits_for(value: usize) -> usize {
    (usize::BITS - value.leading_zeros()) as usize
}

fn check_lengths(a: &[Complex64], b: &[Complex64]) -> Result<(), Error> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        })
    }
}
