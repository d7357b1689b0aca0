use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// Verdict for an adjacent `(left, right)` pair of generators during
/// canonical reordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairRule {
    /// The pair already respects the canonical order.
    InOrder,
    /// Swap the pair and negate the term.
    Exchange,
    /// Swap the pair, negate the term, and additionally emit the term with
    /// the pair contracted away.
    ExchangeContract,
    /// The whole term is algebraically zero.
    Vanish,
}

/// A single generator of an operator algebra with a canonical ordering.
///
/// The two methods are all the generic machinery needs: how a generator
/// behaves under the adjoint, and how an adjacent pair rewrites under the
/// algebra's (anti)commutation identities.
pub trait GeneratorAction: Copy + Eq + Hash + fmt::Debug {
    /// The adjoint of a single generator.
    #[must_use]
    fn dagger(self) -> Self;

    /// How the product `left * right` of two adjacent generators rewrites.
    fn reorder(left: Self, right: Self) -> PairRule;
}

/// A single fermionic ladder action on one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FermionAction {
    pub create: bool,
    pub mode: u32,
}

/// The creation action `a†_mode`.
#[must_use]
pub const fn cre(mode: u32) -> FermionAction {
    FermionAction { create: true, mode }
}

/// The annihilation action `a_mode`.
#[must_use]
pub const fn ann(mode: u32) -> FermionAction {
    FermionAction { create: false, mode }
}

impl GeneratorAction for FermionAction {
    #[inline]
    fn dagger(self) -> Self {
        Self { create: !self.create, mode: self.mode }
    }

    fn reorder(left: Self, right: Self) -> PairRule {
        if left.create == right.create {
            // Like actions anticommute freely; a repeated mode squares to zero.
            match right.mode.cmp(&left.mode) {
                Ordering::Equal => PairRule::Vanish,
                Ordering::Greater => PairRule::Exchange,
                Ordering::Less => PairRule::InOrder,
            }
        } else if right.create {
            // `a_i a†_j = δ_ij - a†_j a_i`
            if right.mode == left.mode {
                PairRule::ExchangeContract
            } else {
                PairRule::Exchange
            }
        } else {
            PairRule::InOrder
        }
    }
}

impl fmt::Display for FermionAction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}_{}", if self.create { '+' } else { '-' }, self.mode)
    }
}

/// A single Majorana generator, identified by its flat index `2 * mode + variant`.
///
/// The unprimed generator `γ_m = a†_m + a_m` sits at even flat index `2m`,
/// the primed generator `γ'_m = i (a†_m - a_m)` at odd flat index `2m + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MajoranaAction(pub u32);

/// The Majorana generator `γ_mode` (`prime == false`) or `γ'_mode` (`prime == true`).
#[must_use]
pub const fn gamma(mode: u32, prime: bool) -> MajoranaAction {
    MajoranaAction(2 * mode + prime as u32)
}

impl MajoranaAction {
    #[must_use]
    #[inline]
    pub const fn flat_index(self) -> u32 {
        self.0
    }

    #[must_use]
    #[inline]
    pub const fn mode(self) -> u32 {
        self.0 / 2
    }

    #[must_use]
    #[inline]
    pub const fn is_prime(self) -> bool {
        self.0 & 1 == 1
    }
}

impl GeneratorAction for MajoranaAction {
    #[inline]
    fn dagger(self) -> Self {
        // Majorana generators are self-adjoint.
        self
    }

    fn reorder(left: Self, right: Self) -> PairRule {
        // Distinct generators anticommute; equal adjacent generators square
        // to one and are collapsed by the optional reduction pass, not here.
        if right.0 > left.0 {
            PairRule::Exchange
        } else {
            PairRule::InOrder
        }
    }
}

impl fmt::Display for MajoranaAction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "g{}{}", self.mode(), if self.is_prime() { "'" } else { "" })
    }
}
