//! The isomorphism between the fermionic and Majorana representations.
//!
//! Generator conventions: `γ_m = a†_m + a_m` and `γ'_m = i (a†_m - a_m)`,
//! equivalently `a†_m = (γ_m - i γ'_m) / 2` and `a_m = (γ_m + i γ'_m) / 2`.
//! With both directions derived from the same convention the two maps are
//! exact mutual inverses up to normal-ordering.

use fermimer::{
    ann, cre, gamma, map_generators, FermionAction, FermionOperator, MajoranaAction, MajoranaOperator,
    OperatorAlgebra,
};
use num_complex::Complex64;

fn map_fermion_action(action: FermionAction) -> MajoranaOperator {
    let lowering = if action.create { -0.5 } else { 0.5 };
    MajoranaOperator::from_terms([
        (vec![gamma(action.mode, false)], Complex64::new(0.5, 0.0)),
        (vec![gamma(action.mode, true)], Complex64::new(0.0, lowering)),
    ])
}

fn map_majorana_action(action: MajoranaAction) -> FermionOperator {
    if action.is_prime() {
        FermionOperator::from_terms([
            (vec![cre(action.mode())], Complex64::new(0.0, 1.0)),
            (vec![ann(action.mode())], Complex64::new(0.0, -1.0)),
        ])
    } else {
        FermionOperator::from_terms([
            (vec![cre(action.mode())], Complex64::new(1.0, 0.0)),
            (vec![ann(action.mode())], Complex64::new(1.0, 0.0)),
        ])
    }
}

/// Re-expresses a fermionic operator over Majorana generators.
///
/// The result is raw: callers normal-order and simplify as needed.
#[must_use]
pub fn fermion_to_majorana(operator: &FermionOperator) -> MajoranaOperator {
    map_generators(operator, map_fermion_action, MajoranaOperator::one)
}

/// Re-expresses a Majorana operator over fermionic ladder actions.
#[must_use]
pub fn majorana_to_fermion(operator: &MajoranaOperator) -> FermionOperator {
    map_generators(operator, map_majorana_action, FermionOperator::one)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn real(value: f64) -> Complex64 {
        Complex64::new(value, 0.0)
    }

    fn imag(value: f64) -> Complex64 {
        Complex64::new(0.0, value)
    }

    fn canonical_majorana(operator: &MajoranaOperator) -> MajoranaOperator {
        operator.normal_ordered(true).simplify(1e-12)
    }

    fn canonical_fermion(operator: &FermionOperator) -> FermionOperator {
        operator.normal_ordered().simplify(1e-12)
    }

    #[test]
    fn ladder_actions_split_into_generator_pairs() {
        let raising = FermionOperator::from_terms([(vec![cre(0)], real(1.0))]);
        let expected = MajoranaOperator::from_terms([
            (vec![gamma(0, false)], real(0.5)),
            (vec![gamma(0, true)], imag(-0.5)),
        ]);
        assert!(fermion_to_majorana(&raising).equiv(&expected, 1e-12));
    }

    #[test]
    fn generators_split_into_ladder_pairs() {
        let unprimed = MajoranaOperator::from_terms([(vec![gamma(2, false)], real(1.0))]);
        let expected = FermionOperator::from_terms([
            (vec![cre(2)], real(1.0)),
            (vec![ann(2)], real(1.0)),
        ]);
        assert!(majorana_to_fermion(&unprimed).equiv(&expected, 1e-12));

        let primed = MajoranaOperator::from_terms([(vec![gamma(2, true)], real(1.0))]);
        let expected = FermionOperator::from_terms([
            (vec![cre(2)], imag(1.0)),
            (vec![ann(2)], imag(-1.0)),
        ]);
        assert!(majorana_to_fermion(&primed).equiv(&expected, 1e-12));
    }

    #[test]
    fn number_operator_in_majorana_form() {
        // a†_0 a_0 = 1/2 - (i/2) γ'_0 γ_0
        let number = FermionOperator::from_terms([(vec![cre(0), ann(0)], real(1.0))]);
        let expected = MajoranaOperator::from_terms([
            (vec![], real(0.5)),
            (vec![gamma(0, true), gamma(0, false)], imag(-0.5)),
        ]);
        assert!(canonical_majorana(&fermion_to_majorana(&number)).equiv(&expected, 1e-12));
    }

    #[test]
    fn generator_products_are_self_inverse() {
        // γ_0 γ'_0 maps back to itself through the fermionic side.
        let pair = MajoranaOperator::from_terms([(vec![gamma(0, false), gamma(0, true)], real(1.0))]);
        let round_trip = fermion_to_majorana(&majorana_to_fermion(&pair));
        assert!(canonical_majorana(&round_trip).equiv(&canonical_majorana(&pair), 1e-12));
    }

    #[test]
    fn round_trip_restores_a_hopping_operator() {
        let hopping = FermionOperator::from_terms([
            (vec![cre(0), ann(1)], Complex64::new(0.5, 0.25)),
            (vec![cre(1), ann(0)], Complex64::new(0.5, -0.25)),
        ]);
        let round_trip = majorana_to_fermion(&fermion_to_majorana(&hopping));
        assert!(canonical_fermion(&round_trip).equiv(&canonical_fermion(&hopping), 1e-12));
    }

    #[test]
    fn mapping_commutes_with_the_adjoint() {
        let operator = FermionOperator::from_terms([(vec![cre(0), ann(1)], Complex64::new(1.0, -2.0))]);
        let mapped_then_adjoint = canonical_majorana(&fermion_to_majorana(&operator).adjoint());
        let adjoint_then_mapped = canonical_majorana(&fermion_to_majorana(&operator.adjoint()));
        assert!(mapped_then_adjoint.equiv(&adjoint_then_mapped, 1e-12));
    }
}
