// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{Error, Gate, QubitID, kernels};
use num_complex::{Complex, Complex64};
use num_traits::{Float, FloatConst, NumAssign};
use std::fmt;

/// Largest register a dense state vector is allowed to allocate.
pub const MAX_QUBITS: usize = 30;

/// Width of the floating-point components of each amplitude.
///
/// Implemented for `f32` and `f64`; the caller picks one per state vector.
pub trait Precision:
    Float + FloatConst + NumAssign + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Converts from `f64`, rounding to the nearest representable value.
    fn narrow(value: f64) -> Self;

    /// Converts to `f64` without loss.
    fn widen(self) -> f64;
}

impl Precision for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn narrow(value: f64) -> Self {
        value as f32
    }

    fn widen(self) -> f64 {
        f64::from(self)
    }
}

impl Precision for f64 {
    fn narrow(value: f64) -> Self {
        value
    }

    fn widen(self) -> f64 {
        self
    }
}

/// The joint state of `num_qubits` qubits as `2^num_qubits` complex amplitudes.
///
/// Bit `k` of an amplitude's index is the value of qubit `k`, so qubit 0 is the
/// least significant bit. Gates are applied in place and the vector is never
/// renormalized; any floating-point drift is left for the caller to observe.
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector<T: Precision> {
    num_qubits: usize,
    amplitudes: Vec<Complex<T>>,
}

impl<T: Precision> StateVector<T> {
    /// Creates the computational basis state `|basis⟩` on `num_qubits` qubits.
    pub fn new(num_qubits: usize, basis: usize) -> Result<Self, Error> {
        if num_qubits == 0 {
            return Err(Error::NoQubits);
        }
        if num_qubits > MAX_QUBITS {
            return Err(Error::TooManyQubits(num_qubits));
        }
        let dim = 1_usize << num_qubits;
        if basis >= dim {
            return Err(Error::BasisOutOfRange { basis, num_qubits });
        }

        let mut amplitudes = vec![Complex::new(T::zero(), T::zero()); dim];
        amplitudes[basis] = Complex::new(T::one(), T::zero());
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Creates `|0…0⟩` on `num_qubits` qubits.
    pub fn zero(num_qubits: usize) -> Result<Self, Error> {
        Self::new(num_qubits, 0)
    }

    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Amplitudes in natural, LSB-first basis-index order.
    #[must_use]
    pub fn amplitudes(&self) -> &[Complex<T>] {
        &self.amplitudes
    }

    #[must_use]
    pub fn into_amplitudes(self) -> Vec<Complex<T>> {
        self.amplitudes
    }

    /// Euclidean norm of the amplitudes. Stays close to 1 under unitary gates.
    #[must_use]
    pub fn norm(&self) -> T {
        self.amplitudes
            .iter()
            .map(Complex::norm_sqr)
            .fold(T::zero(), |acc, p| acc + p)
            .sqrt()
    }

    /// Widens every amplitude to double precision, e.g. for comparison
    /// against a reference vector.
    #[must_use]
    pub fn to_complex64(&self) -> Vec<Complex64> {
        self.amplitudes
            .iter()
            .map(|a| Complex64::new(a.re.widen(), a.im.widen()))
            .collect()
    }

    pub fn h(&mut self, target: QubitID) -> Result<(), Error> {
        self.check_qubit(target)?;
        kernels::h(&mut self.amplitudes, target);
        Ok(())
    }

    pub fn x(&mut self, target: QubitID) -> Result<(), Error> {
        self.check_qubit(target)?;
        kernels::x(&mut self.amplitudes, target);
        Ok(())
    }

    pub fn z(&mut self, target: QubitID) -> Result<(), Error> {
        self.check_qubit(target)?;
        kernels::z(&mut self.amplitudes, target);
        Ok(())
    }

    pub fn cx(&mut self, control: QubitID, target: QubitID) -> Result<(), Error> {
        self.check_control_target(control, target)?;
        kernels::cx(&mut self.amplitudes, control, target);
        Ok(())
    }

    /// Applies the phase `e^(i·theta)` to the basis states where both
    /// `control` and `target` are one.
    ///
    /// Like [`Self::cx`], a repeated qubit is an invalid operation
    /// ([`Error::ControlIsTarget`]) rather than a single-qubit phase.
    pub fn cphase(&mut self, control: QubitID, target: QubitID, theta: f64) -> Result<(), Error> {
        self.check_control_target(control, target)?;
        let phase = Complex::from_polar(T::one(), T::narrow(theta));
        kernels::cphase(&mut self.amplitudes, control, target, phase);
        Ok(())
    }

    /// Exchanges two qubits. Swapping a qubit with itself does nothing.
    pub fn swap(&mut self, q1: QubitID, q2: QubitID) -> Result<(), Error> {
        self.check_qubit(q1)?;
        self.check_qubit(q2)?;
        kernels::swap(&mut self.amplitudes, q1, q2);
        Ok(())
    }

    /// Applies a single gate operation.
    pub fn apply(&mut self, gate: &Gate) -> Result<(), Error> {
        match *gate {
            Gate::H { target } => self.h(target),
            Gate::X { target } => self.x(target),
            Gate::Z { target } => self.z(target),
            Gate::CX { control, target } => self.cx(control, target),
            Gate::CPhase {
                control,
                target,
                theta,
            } => self.cphase(control, target, theta),
            Gate::Swap { q1, q2 } => self.swap(q1, q2),
        }
    }

    fn check_qubit(&self, qubit: QubitID) -> Result<(), Error> {
        if qubit < self.num_qubits {
            Ok(())
        } else {
            Err(Error::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            })
        }
    }

    fn check_control_target(&self, control: QubitID, target: QubitID) -> Result<(), Error> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(Error::ControlIsTarget(control));
        }
        Ok(())
    }
}
