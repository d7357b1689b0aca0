use std::fmt;
use std::iter::zip;

use itertools::Itertools;
use num_complex::Complex64;

use super::normal_order::normal_order_term;
use crate::action::FermionAction;
use crate::error::{check_boundaries, LayoutError};
use crate::traits::{OperatorAlgebra, SumTerms, SumTermsMut};

/// A sparse second-quantized fermionic operator: a weighted sum of products
/// of creation and annihilation actions on integer-labelled modes.
///
/// Terms are stored in four parallel vectors. `actions[k]` and `indices[k]`
/// together describe the `k`-th stored action (`true` for creation, plus the
/// mode it acts on); `boundaries[t]..boundaries[t + 1]` delimits the actions
/// of term `t`, whose coefficient is `coeffs[t]`. The layout is the
/// compressed-sparse-row idea applied to a term list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FermionOperator {
    coeffs: Vec<Complex64>,
    actions: Vec<bool>,
    indices: Vec<u32>,
    boundaries: Vec<usize>,
}

impl Default for FermionOperator {
    fn default() -> Self {
        Self { coeffs: Vec::new(), actions: Vec::new(), indices: Vec::new(), boundaries: vec![0] }
    }
}

/// A borrowed view of one stored fermionic term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FermionTermView<'a> {
    pub coeff: Complex64,
    pub actions: &'a [bool],
    pub indices: &'a [u32],
}

impl FermionTermView<'_> {
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = FermionAction> + ExactSizeIterator + '_ {
        zip(self.actions, self.indices).map(|(&create, &mode)| FermionAction { create, mode })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl FermionOperator {
    /// Builds an operator directly from its parallel arrays, validating the
    /// packed-layout invariants.
    pub fn from_raw(
        coeffs: Vec<Complex64>,
        actions: Vec<bool>,
        indices: Vec<u32>,
        boundaries: Vec<usize>,
    ) -> Result<Self, LayoutError> {
        if coeffs.len() + 1 != boundaries.len() {
            return Err(LayoutError::MismatchedTermCount { coeffs: coeffs.len(), boundaries: boundaries.len() });
        }
        if actions.len() != indices.len() {
            return Err(LayoutError::MismatchedActionCount { actions: actions.len(), indices: indices.len() });
        }
        check_boundaries(&boundaries, indices.len())?;
        Ok(Self { coeffs, actions, indices, boundaries })
    }

    /// Builds an operator from `(actions, coefficient)` pairs.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (Vec<FermionAction>, Complex64)>,
    {
        terms.into_iter().collect()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = FermionTermView<'_>> + ExactSizeIterator {
        self.boundaries.windows(2).enumerate().map(|(term, bounds)| FermionTermView {
            coeff: self.coeffs[term],
            actions: &self.actions[bounds[0]..bounds[1]],
            indices: &self.indices[bounds[0]..bounds[1]],
        })
    }

    /// Rewrites every term into canonical normal order: all creations before
    /// all annihilations, each block in descending mode order, with the
    /// contraction terms the anticommutation identities produce.
    ///
    /// The result represents the same operator; duplicate terms are not
    /// merged, so callers usually follow with `simplify`.
    #[must_use]
    pub fn normal_ordered(&self) -> Self {
        let mut result = Self::zero();
        for term in 0..self.len() {
            normal_order_term(self.term_actions(term), self.coeffs[term], &mut result);
        }
        result
    }

    /// Whether the operator equals its adjoint, compared in normal order.
    #[must_use]
    pub fn is_hermitian(&self, atol: f64) -> bool {
        let mut difference = self.clone();
        difference.sub_assign_terms(&self.adjoint());
        difference.normal_ordered().simplify(atol).is_empty()
    }

    /// Whether every term creates exactly as many particles as it destroys.
    #[must_use]
    pub fn conserves_particle_number(&self) -> bool {
        self.iter().all(|term| {
            let created = term.actions.iter().filter(|&&create| create).count();
            2 * created == term.len()
        })
    }
}

impl SumTerms for FermionOperator {
    type Action = FermionAction;

    fn coeffs(&self) -> &[Complex64] {
        &self.coeffs
    }

    fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    fn term_actions(&self, index: usize) -> impl DoubleEndedIterator<Item = FermionAction> + ExactSizeIterator {
        let bounds = self.boundaries[index]..self.boundaries[index + 1];
        zip(&self.actions[bounds.clone()], &self.indices[bounds]).map(|(&create, &mode)| FermionAction { create, mode })
    }
}

impl SumTermsMut for FermionOperator {
    fn coeffs_mut(&mut self) -> &mut [Complex64] {
        &mut self.coeffs
    }

    fn push_term<I>(&mut self, actions: I, coeff: Complex64)
    where
        I: IntoIterator<Item = FermionAction>,
    {
        self.coeffs.push(coeff);
        for action in actions {
            self.actions.push(action.create);
            self.indices.push(action.mode);
        }
        self.boundaries.push(self.actions.len());
    }
}

impl FromIterator<(Vec<FermionAction>, Complex64)> for FermionOperator {
    fn from_iter<I: IntoIterator<Item = (Vec<FermionAction>, Complex64)>>(terms: I) -> Self {
        let mut operator = Self::default();
        for (actions, coeff) in terms {
            operator.push_term(actions, coeff);
        }
        operator
    }
}

impl fmt::Display for FermionOperator {
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
