use std::collections::HashMap;

use num_complex::Complex64;

use crate::action::GeneratorAction;
use crate::error::ArithmeticError;

/// Read access to a packed sum-of-products operator.
///
/// A term is a coefficient together with an ordered sequence of generator
/// actions; the product of an empty sequence is the identity. Implementors
/// store terms in parallel arrays addressed through `boundaries`.
pub trait SumTerms {
    type Action: GeneratorAction;

    /// One coefficient per stored term.
    fn coeffs(&self) -> &[Complex64];

    /// Term boundaries into the action storage. Always one element longer
    /// than `coeffs`, starting at 0 and non-decreasing.
    fn boundaries(&self) -> &[usize];

    /// The action sequence of the term at `index`, left to right.
    fn term_actions(&self, index: usize) -> impl DoubleEndedIterator<Item = Self::Action> + ExactSizeIterator;

    /// The number of stored terms. Equal coefficient-action sequences may be
    /// stored repeatedly; `simplify` merges them.
    #[inline]
    fn len(&self) -> usize {
        self.coeffs().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.coeffs().is_empty()
    }
}

/// Write access to a packed sum-of-products operator.
pub trait SumTermsMut: SumTerms {
    fn coeffs_mut(&mut self) -> &mut [Complex64];

    /// Appends one term. The actions are stored verbatim, in iteration order.
    fn push_term<I>(&mut self, actions: I, coeff: Complex64)
    where
        I: IntoIterator<Item = Self::Action>;
}

/// The shared algebra of packed operators.
///
/// Everything here is derived from `SumTerms`/`SumTermsMut`, so the fermionic
/// and Majorana operators (and any future algebra over a `GeneratorAction`)
/// get identical arithmetic, comparison, and cleanup semantics.
pub trait OperatorAlgebra: SumTermsMut + Clone + Default {
    /// The additive identity: no terms at all.
    #[must_use]
    fn zero() -> Self {
        Self::default()
    }

    /// The multiplicative identity: a single empty term with coefficient one.
    #[must_use]
    fn one() -> Self {
        let mut operator = Self::default();
        operator.push_term(std::iter::empty(), Complex64::new(1.0, 0.0));
        operator
    }

    /// Appends every term of `other`.
    fn add_assign_terms(&mut self, other: &Self) {
        for index in 0..other.len() {
            self.push_term(other.term_actions(index), other.coeffs()[index]);
        }
    }

    /// Appends every term of `other`, negated.
    fn sub_assign_terms(&mut self, other: &Self) {
        for index in 0..other.len() {
            self.push_term(other.term_actions(index), -other.coeffs()[index]);
        }
    }

    /// Multiplies every coefficient by `factor`.
    fn scale_assign(&mut self, factor: Complex64) {
        for coeff in self.coeffs_mut() {
            *coeff *= factor;
        }
    }

    #[must_use]
    fn scaled(&self, factor: Complex64) -> Self {
        let mut result = self.clone();
        result.scale_assign(factor);
        result
    }

    /// Divides every coefficient by `divisor`, rejecting a zero divisor.
    fn checked_div(&self, divisor: Complex64) -> Result<Self, ArithmeticError> {
        if divisor == Complex64::new(0.0, 0.0) {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self.scaled(1.0 / divisor))
    }

    /// Replaces `self` with the concatenation product "first `self`, then
    /// `other`".
    ///
    /// Action sequences read left to right as an operator product, so the
    /// result's sequences are `other`'s actions followed by `self`'s.
    fn compose_assign(&mut self, other: &Self) {
        let mut result = Self::default();
        for left in 0..self.len() {
            for right in 0..other.len() {
                let coeff = self.coeffs()[left] * other.coeffs()[right];
                result.push_term(other.term_actions(right).chain(self.term_actions(left)), coeff);
            }
        }
        *self = result;
    }

    /// The concatenation product "first `self`, then `other`".
    #[must_use]
    fn composed(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.compose_assign(other);
        result
    }

    /// `self` composed with itself `exponent` times. `pow(0)` is `one()`.
    #[must_use]
    fn pow(&self, exponent: u32) -> Self {
        let mut result = Self::one();
        for _ in 0..exponent {
            result.compose_assign(self);
        }
        result
    }

    /// The Hermitian adjoint: per term, conjugate the coefficient, reverse
    /// the action sequence, and dagger each action.
    #[must_use]
    fn adjoint(&self) -> Self {
        let mut result = Self::default();
        for index in 0..self.len() {
            result.push_term(
                self.term_actions(index).rev().map(GeneratorAction::dagger),
                self.coeffs()[index].conj(),
            );
        }
        result
    }

    /// Removes raw terms whose coefficient magnitude is at most `atol`.
    ///
    /// Purely term-local: coefficients spread over duplicate terms are not
    /// summed first, so `chop` can discard weight that `simplify` would keep.
    fn ichop(&mut self, atol: f64) {
        let mut result = Self::default();
        for index in 0..self.len() {
            let coeff = self.coeffs()[index];
            if coeff.norm() > atol {
                result.push_term(self.term_actions(index), coeff);
            }
        }
        *self = result;
    }

    /// Merges terms with identical action sequences, then drops merged terms
    /// whose coefficient magnitude is at most `atol`.
    #[must_use]
    fn simplify(&self, atol: f64) -> Self {
        let mut merged: HashMap<Vec<Self::Action>, Complex64> = HashMap::new();
        for index in 0..self.len() {
            let actions: Vec<Self::Action> = self.term_actions(index).collect();
            *merged.entry(actions).or_insert(Complex64::new(0.0, 0.0)) += self.coeffs()[index];
        }
        let mut result = Self::default();
        for (actions, coeff) in merged {
            if coeff.norm() > atol {
                result.push_term(actions, coeff);
            }
        }
        result
    }

    /// Whether `self` and `other` agree term-by-term up to `atol`, after
    /// merging duplicate action sequences on both sides.
    ///
    /// Representation-sensitive: operators that are equal only after
    /// normal-ordering compare as different.
    #[must_use]
    fn equiv(&self, other: &Self, atol: f64) -> bool {
        let mut difference = self.clone();
        difference.sub_assign_terms(other);
        difference.simplify(atol).coeffs().iter().all(|coeff| coeff.norm() <= atol)
    }

    /// The length of the longest stored action sequence.
    #[must_use]
    fn many_body_order(&self) -> usize {
        self.boundaries().windows(2).map(|pair| pair[1] - pair[0]).max().unwrap_or(0)
    }
}

impl<T: SumTermsMut + Clone + Default> OperatorAlgebra for T {}
