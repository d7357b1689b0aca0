use std::fmt;

use itertools::Itertools;
use num_complex::Complex64;

use super::normal_order::normal_order_term;
use crate::action::MajoranaAction;
use crate::error::{check_boundaries, LayoutError};
use crate::traits::{OperatorAlgebra, SumTerms, SumTermsMut};

/// A sparse operator over Majorana generators.
///
/// Same packed layout as [`FermionOperator`](super::FermionOperator), except
/// that a single flat index per action suffices: `modes[k]` stores
/// `2 * mode + variant`, so the unprimed and primed generators of one
/// fermionic mode sit at adjacent flat indices.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MajoranaOperator {
    coeffs: Vec<Complex64>,
    modes: Vec<u32>,
    boundaries: Vec<usize>,
}

impl Default for MajoranaOperator {
    fn default() -> Self {
        Self { coeffs: Vec::new(), modes: Vec::new(), boundaries: vec![0] }
    }
}

/// A borrowed view of one stored Majorana term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MajoranaTermView<'a> {
    pub coeff: Complex64,
    pub modes: &'a [u32],
}

impl MajoranaTermView<'_> {
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = MajoranaAction> + ExactSizeIterator + '_ {
        self.modes.iter().map(|&flat| MajoranaAction(flat))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

impl MajoranaOperator {
    /// Builds an operator directly from its parallel arrays, validating the
    /// packed-layout invariants.
    pub fn from_raw(coeffs: Vec<Complex64>, modes: Vec<u32>, boundaries: Vec<usize>) -> Result<Self, LayoutError> {
        if coeffs.len() + 1 != boundaries.len() {
            return Err(LayoutError::MismatchedTermCount { coeffs: coeffs.len(), boundaries: boundaries.len() });
        }
        check_boundaries(&boundaries, modes.len())?;
        Ok(Self { coeffs, modes, boundaries })
    }

    /// Builds an operator from `(actions, coefficient)` pairs.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (Vec<MajoranaAction>, Complex64)>,
    {
        terms.into_iter().collect()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = MajoranaTermView<'_>> + ExactSizeIterator {
        self.boundaries.windows(2).enumerate().map(|(term, bounds)| MajoranaTermView {
            coeff: self.coeffs[term],
            modes: &self.modes[bounds[0]..bounds[1]],
        })
    }

    /// Rewrites every term so its generators appear in descending flat-index
    /// order, tracking the sign of the anticommuting swaps.
    ///
    /// With `reduce`, adjacent equal generators (which square to one) are then
    /// collapsed modulo two, leaving each surviving flat index at most once
    /// per term.
    #[must_use]
    pub fn normal_ordered(&self, reduce: bool) -> Self {
        let mut ordered = Self::zero();
        for term in 0..self.len() {
            normal_order_term(self.term_actions(term), self.coeffs[term], &mut ordered);
        }
        if !reduce {
            return ordered;
        }
        let mut reduced = Self::zero();
        for term in ordered.iter() {
            reduced.coeffs.push(term.coeff);
            reduced.modes.extend(
                term.modes
                    .iter()
                    .dedup_with_count()
                    .filter(|(count, _)| count % 2 == 1)
                    .map(|(_, &flat)| flat),
            );
            reduced.boundaries.push(reduced.modes.len());
        }
        reduced
    }

    /// Whether every term has an even number of generators.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.boundaries.windows(2).all(|pair| (pair[1] - pair[0]) % 2 == 0)
    }

    /// Whether the operator equals its adjoint, compared in reduced normal order.
    #[must_use]
    pub fn is_hermitian(&self, atol: f64) -> bool {
        let mut difference = self.clone();
        difference.sub_assign_terms(&self.adjoint());
        difference.normal_ordered(true).simplify(atol).is_empty()
    }
}

impl SumTerms for MajoranaOperator {
    type Action = MajoranaAction;

    fn coeffs(&self) -> &[Complex64] {
        &self.coeffs
    }

    fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    fn term_actions(&self, index: usize) -> impl DoubleEndedIterator<Item = MajoranaAction> + ExactSizeIterator {
        self.modes[self.boundaries[index]..self.boundaries[index + 1]].iter().map(|&flat| MajoranaAction(flat))
    }
}

impl SumTermsMut for MajoranaOperator {
    fn coeffs_mut(&mut self) -> &mut [Complex64] {
        &mut self.coeffs
    }

    fn push_term<I>(&mut self, actions: I, coeff: Complex64)
    where
        I: IntoIterator<Item = MajoranaAction>,
    {
        self.coeffs.push(coeff);
        self.modes.extend(actions.into_iter().map(MajoranaAction::flat_index));
        self.boundaries.push(self.modes.len());
    }
}

impl FromIterator<(Vec<MajoranaAction>, Complex64)> for MajoranaOperator {
    fn from_iter<I: IntoIterator<Item = (Vec<MajoranaAction>, Complex64)>>(terms: I) -> Self {
        let mut operator = Self::default();
        for (actions, coeff) in terms {
            operator.push_term(actions, coeff);
        }
        operator
    }
}

impl fmt::Display for MajoranaOperator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, term) in self.iter().enumerate() {
            if index > 0 {
                writeln!(formatter)?;
            }
            let actions = term.iter().map(|action| action.to_string()).join(" ");
            write!(formatter, "({:+.6}{:+.6}i) * ({actions})", term.coeff.re, term.coeff.im)?;
        }
        Ok(())
    }
}
