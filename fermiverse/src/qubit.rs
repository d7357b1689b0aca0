use std::collections::HashMap;
use std::fmt;
use std::iter::zip;
use std::ops::{Add, AddAssign, BitAnd, Mul, MulAssign, Neg, Sub};

use num_complex::Complex64;
use thiserror::Error;

/// A single-qubit Pauli axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    const fn label(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }
}

/// The product `left * right` of two single-qubit Paulis on the same qubit:
/// a power of `i` and the resulting axis (`None` for the identity).
const fn axis_product(left: Axis, right: Axis) -> (u8, Option<Axis>) {
    match (left, right) {
        (Axis::X, Axis::X) | (Axis::Y, Axis::Y) | (Axis::Z, Axis::Z) => (0, None),
        (Axis::X, Axis::Y) => (1, Some(Axis::Z)),
        (Axis::Y, Axis::X) => (3, Some(Axis::Z)),
        (Axis::Y, Axis::Z) => (1, Some(Axis::X)),
        (Axis::Z, Axis::Y) => (3, Some(Axis::X)),
        (Axis::Z, Axis::X) => (1, Some(Axis::Y)),
        (Axis::X, Axis::Z) => (3, Some(Axis::Y)),
    }
}

const fn phase(exponent: u8) -> Complex64 {
    match exponent % 4 {
        0 => Complex64::new(1.0, 0.0),
        1 => Complex64::new(0.0, 1.0),
        2 => Complex64::new(-1.0, 0.0),
        _ => Complex64::new(0.0, -1.0),
    }
}

/// A packed qubit operator whose parallel arrays do not describe a valid
/// Pauli-sum.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum QubitLayoutError {
    #[error("`boundaries` ({boundaries}) must be one element longer than `coeffs` ({coeffs})")]
    MismatchedTermCount { coeffs: usize, boundaries: usize },
    #[error("`axes` ({axes}) and `indices` ({indices}) must have the same length")]
    MismatchedAxisCount { axes: usize, indices: usize },
    #[error("the first entry of `boundaries` must be 0, not {0}")]
    BadInitialBoundary(usize),
    #[error("the last entry of `boundaries` ({last}) must equal the number of stored axes ({axes})")]
    BadFinalBoundary { last: usize, axes: usize },
    #[error("`boundaries` must be non-decreasing")]
    DecreasingBoundaries,
    #[error("the qubit indices of a term must be strictly increasing")]
    UnsortedIndices,
    #[error("qubit index {index} is out of range for {num_qubits} qubits")]
    IndexTooHigh { index: u32, num_qubits: u32 },
}

/// A sparse sum of Pauli strings over a fixed number of qubits.
///
/// The same packed layout as the fermionic operators: `coeffs` per term,
/// `axes`/`indices` describing the single-qubit Paulis of all terms back to
/// back, and `boundaries` delimiting terms. Within a term the qubit indices
/// are strictly increasing, so composition can merge two terms with a single
/// pass.
#[derive(Clone, Debug, PartialEq)]
pub struct QubitOperator {
    num_qubits: u32,
    coeffs: Vec<Complex64>,
    axes: Vec<Axis>,
    indices: Vec<u32>,
    boundaries: Vec<usize>,
}

/// A borrowed view of one stored Pauli-string term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QubitTermView<'a> {
    pub coeff: Complex64,
    pub axes: &'a [Axis],
    pub indices: &'a [u32],
}

impl QubitOperator {
    /// The operator with no terms.
    #[must_use]
    pub fn zero(num_qubits: u32) -> Self {
        Self { num_qubits, coeffs: Vec::new(), axes: Vec::new(), indices: Vec::new(), boundaries: vec![0] }
    }

    /// The identity: one empty Pauli string with coefficient one.
    #[must_use]
    pub fn identity(num_qubits: u32) -> Self {
        let mut operator = Self::zero(num_qubits);
        operator.push_term_unchecked([], Complex64::new(1.0, 0.0));
        operator
    }

    /// Builds an operator directly from its parallel arrays, validating the
    /// packed-layout invariants.
    pub fn from_raw(
        num_qubits: u32,
        coeffs: Vec<Complex64>,
        axes: Vec<Axis>,
        indices: Vec<u32>,
        boundaries: Vec<usize>,
    ) -> Result<Self, QubitLayoutError> {
        if coeffs.len() + 1 != boundaries.len() {
            return Err(QubitLayoutError::MismatchedTermCount { coeffs: coeffs.len(), boundaries: boundaries.len() });
        }
        if axes.len() != indices.len() {
            return Err(QubitLayoutError::MismatchedAxisCount { axes: axes.len(), indices: indices.len() });
        }
        if boundaries[0] != 0 {
            return Err(QubitLayoutError::BadInitialBoundary(boundaries[0]));
        }
        let last = boundaries[boundaries.len() - 1];
        if last != axes.len() {
            return Err(QubitLayoutError::BadFinalBoundary { last, axes: axes.len() });
        }
        if boundaries.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(QubitLayoutError::DecreasingBoundaries);
        }
        for bounds in boundaries.windows(2) {
            let term = &indices[bounds[0]..bounds[1]];
            if term.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(QubitLayoutError::UnsortedIndices);
            }
        }
        if let Some(&index) = indices.iter().find(|&&index| index >= num_qubits) {
            return Err(QubitLayoutError::IndexTooHigh { index, num_qubits });
        }
        Ok(Self { num_qubits, coeffs, axes, indices, boundaries })
    }

    /// Builds an operator from `(paulis, coefficient)` pairs, where each
    /// `paulis` list holds `(qubit, axis)` entries with strictly increasing
    /// qubit indices.
    pub fn from_sparse_terms<I>(num_qubits: u32, terms: I) -> Result<Self, QubitLayoutError>
    where
        I: IntoIterator<Item = (Vec<(u32, Axis)>, Complex64)>,
    {
        let mut operator = Self::zero(num_qubits);
        for (paulis, coeff) in terms {
            if paulis.windows(2).any(|pair| pair[0].0 >= pair[1].0) {
                return Err(QubitLayoutError::UnsortedIndices);
            }
            if let Some(&(index, _)) = paulis.iter().find(|&&(index, _)| index >= num_qubits) {
                return Err(QubitLayoutError::IndexTooHigh { index, num_qubits });
            }
            operator.push_term_unchecked(paulis, coeff);
        }
        Ok(operator)
    }

    /// Appends one term whose `(qubit, axis)` entries the caller guarantees
    /// to be strictly increasing and in range.
    pub(crate) fn push_term_unchecked<I>(&mut self, paulis: I, coeff: Complex64)
    where
        I: IntoIterator<Item = (u32, Axis)>,
    {
        self.coeffs.push(coeff);
        for (index, axis) in paulis {
            self.indices.push(index);
            self.axes.push(axis);
        }
        self.boundaries.push(self.axes.len());
    }

    #[must_use]
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    #[must_use]
    pub fn coeffs(&self) -> &[Complex64] {
        &self.coeffs
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = QubitTermView<'_>> + ExactSizeIterator {
        self.boundaries.windows(2).enumerate().map(|(term, bounds)| QubitTermView {
            coeff: self.coeffs[term],
            axes: &self.axes[bounds[0]..bounds[1]],
            indices: &self.indices[bounds[0]..bounds[1]],
        })
    }

    /// Appends the matrix product `left * right` of two Pauli-string terms,
    /// merging their sorted index lists and tracking the `i^k` phase.
    fn push_product_term(&mut self, left: QubitTermView<'_>, right: QubitTermView<'_>) {
        let start = self.axes.len();
        let mut exponent = 0u8;
        let mut left_at = 0;
        let mut right_at = 0;
        while left_at < left.indices.len() && right_at < right.indices.len() {
            let left_index = left.indices[left_at];
            let right_index = right.indices[right_at];
            if left_index < right_index {
                self.indices.push(left_index);
                self.axes.push(left.axes[left_at]);
                left_at += 1;
            } else if right_index < left_index {
                self.indices.push(right_index);
                self.axes.push(right.axes[right_at]);
                right_at += 1;
            } else {
                let (power, product) = axis_product(left.axes[left_at], right.axes[right_at]);
                exponent = (exponent + power) % 4;
                if let Some(axis) = product {
                    self.indices.push(left_index);
                    self.axes.push(axis);
                }
                left_at += 1;
                right_at += 1;
            }
        }
        self.indices.extend_from_slice(&left.indices[left_at..]);
        self.axes.extend_from_slice(&left.axes[left_at..]);
        self.indices.extend_from_slice(&right.indices[right_at..]);
        self.axes.extend_from_slice(&right.axes[right_at..]);

        debug_assert!(self.indices[start..].windows(2).all(|pair| pair[0] < pair[1]));
        self.coeffs.push(left.coeff * right.coeff * phase(exponent));
        self.boundaries.push(self.axes.len());
    }

    /// Merges terms with identical Pauli strings, then drops merged terms
    /// whose coefficient magnitude is at most `atol`.
    #[must_use]
    pub fn simplify(&self, atol: f64) -> Self {
        let mut merged: HashMap<Vec<(u32, Axis)>, Complex64> = HashMap::new();
        for term in self.iter() {
            let paulis: Vec<(u32, Axis)> = zip(term.indices, term.axes).map(|(&index, &axis)| (index, axis)).collect();
            *merged.entry(paulis).or_insert(Complex64::new(0.0, 0.0)) += term.coeff;
        }
        let mut result = Self::zero(self.num_qubits);
        for (paulis, coeff) in merged {
            if coeff.norm() > atol {
                result.push_term_unchecked(paulis, coeff);
            }
        }
        result
    }

    /// Whether `self` and `other` agree term-by-term up to `atol` after
    /// merging duplicate Pauli strings on both sides.
    #[must_use]
    pub fn equiv(&self, other: &Self, atol: f64) -> bool {
        assert_eq!(self.num_qubits, other.num_qubits, "operand qubit counts differ");
        let mut difference = self.clone();
        for term in other.iter() {
            difference.push_term_unchecked(
                zip(term.indices, term.axes).map(|(&index, &axis)| (index, axis)),
                -term.coeff,
            );
        }
        difference.simplify(atol).coeffs.iter().all(|coeff| coeff.norm() <= atol)
    }
}

impl Add for QubitOperator {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl AddAssign for QubitOperator {
    fn add_assign(&mut self, other: Self) {
        assert_eq!(self.num_qubits, other.num_qubits, "operand qubit counts differ");
        for term in other.iter() {
            self.push_term_unchecked(zip(term.indices, term.axes).map(|(&index, &axis)| (index, axis)), term.coeff);
        }
    }
}

impl Sub for QubitOperator {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + -other
    }
}

impl Neg for QubitOperator {
    type Output = Self;

    fn neg(mut self) -> Self {
        for coeff in &mut self.coeffs {
            *coeff = -*coeff;
        }
        self
    }
}

impl Mul<Complex64> for QubitOperator {
    type Output = Self;

    fn mul(mut self, factor: Complex64) -> Self {
        self *= factor;
        self
    }
}

impl Mul<QubitOperator> for Complex64 {
    type Output = QubitOperator;

    fn mul(self, operator: QubitOperator) -> QubitOperator {
        operator * self
    }
}

impl MulAssign<Complex64> for QubitOperator {
    fn mul_assign(&mut self, factor: Complex64) {
        for coeff in &mut self.coeffs {
            *coeff *= factor;
        }
    }
}

impl BitAnd for QubitOperator {
    type Output = Self;

    /// The concatenation-product analogue: `a & b` is "first apply `a`, then
    /// `b`", so each product term is the matrix product of `b`'s term with
    /// `a`'s term.
    fn bitand(self, other: Self) -> Self {
        assert_eq!(self.num_qubits, other.num_qubits, "operand qubit counts differ");
        let mut result = Self::zero(self.num_qubits);
        for left in self.iter() {
            for right in other.iter() {
                result.push_product_term(right, left);
            }
        }
        result
    }
}

impl fmt::Display for QubitOperator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, term) in self.iter().enumerate() {
            if index > 0 {
                writeln!(formatter)?;
            }
            write!(formatter, "({:+.6}{:+.6}i) *", term.coeff.re, term.coeff.im)?;
            if term.indices.is_empty() {
                write!(formatter, " I")?;
            }
            for (&qubit, &axis) in zip(term.indices, term.axes) {
                write!(formatter, " {}{qubit}", axis.label())?;
            }
        }
        Ok(())
    }
}
