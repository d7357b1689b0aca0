//! Generic re-expression of an operator in another target algebra.
//!
//! Concrete mappers (Jordan-Wigner and friends) plug in through three
//! callbacks: how a single generator action maps into the target, what the
//! target's multiplicative identity is, and how two target values compose.

use std::ops::{Add, BitAnd, Mul};

use num_complex::Complex64;

use crate::traits::SumTerms;

/// Folds one term's actions into the target algebra.
///
/// The accumulator starts at `identity()` and each action is composed onto it
/// from the left: `acc = compose(map_action(action), acc)`. The term's last
/// action therefore ends up outermost in the composed product, which is the
/// ordering convention every concrete mapper relies on.
pub fn map_term_generators<Action, Target>(
    actions: impl Iterator<Item = Action>,
    mut map_action: impl FnMut(Action) -> Target,
    identity: impl Fn() -> Target,
    compose: impl Fn(Target, Target) -> Target,
) -> Target {
    let mut accumulator = identity();
    for action in actions {
        accumulator = compose(map_action(action), accumulator);
    }
    accumulator
}

/// Maps a whole operator into the target algebra with an explicit composition
/// rule.
///
/// Each term contributes its folded accumulator scaled by its coefficient;
/// contributions are summed starting from `0 * identity()`, so the result is
/// well-formed even for the zero operator.
pub fn map_generators_with<Op, Target>(
    operator: &Op,
    mut map_action: impl FnMut(Op::Action) -> Target,
    identity: impl Fn() -> Target,
    compose: impl Fn(Target, Target) -> Target,
) -> Target
where
    Op: SumTerms,
    Target: Add<Output = Target> + Mul<Complex64, Output = Target>,
{
    let mut mapped = identity() * Complex64::new(0.0, 0.0);
    for term in 0..operator.len() {
        let accumulator = map_term_generators(operator.term_actions(term), &mut map_action, &identity, &compose);
        mapped = mapped + accumulator * operator.coeffs()[term];
    }
    mapped
}

/// [`map_generators_with`] using the target's `&` operator as composition.
pub fn map_generators<Op, Target>(
    operator: &Op,
    map_action: impl FnMut(Op::Action) -> Target,
    identity: impl Fn() -> Target,
) -> Target
where
    Op: SumTerms,
    Target: Add<Output = Target> + Mul<Complex64, Output = Target> + BitAnd<Output = Target>,
{
    map_generators_with(operator, map_action, identity, |action, accumulator| action & accumulator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ann, cre, FermionAction};
    use crate::operator::FermionOperator;
    use crate::traits::OperatorAlgebra;

    fn real(value: f64) -> Complex64 {
        Complex64::new(value, 0.0)
    }

    #[test]
    fn identity_mapping_reproduces_the_operator() {
        let operator = FermionOperator::from_terms([
            (vec![cre(0), ann(1)], Complex64::new(1.0, -1.0)),
            (vec![], real(2.0)),
        ]);
        let mapped: FermionOperator = map_generators(
            &operator,
            |action| FermionOperator::from_terms([(vec![action], real(1.0))]),
            FermionOperator::one,
        );
        assert!(mapped.equiv(&operator, 1e-12));
    }

    #[test]
    fn fold_direction_puts_the_last_action_outermost() {
        // Map each action to its mode as a string and compose by
        // concatenation; the composed string must read reversed.
        let operator = FermionOperator::from_terms([(vec![cre(0), cre(1), cre(2)], real(1.0))]);
        let folded = map_term_generators(
            operator.term_actions(0),
            |action: FermionAction| action.mode.to_string(),
            String::new,
            |action, accumulator| action + &accumulator,
        );
        assert_eq!(folded, "210");
    }

    #[test]
    fn zero_operator_maps_to_scaled_identity() {
        let mapped: FermionOperator =
            map_generators(&FermionOperator::zero(), |_| FermionOperator::one(), FermionOperator::one);
        assert!(mapped.equiv(&FermionOperator::zero(), 1e-12));
    }
}
