//! Commutator expressions over any packed operator algebra.
//!
//! Results are raw concatenation products; callers canonicalize and simplify
//! as needed.

use num_complex::Complex64;

use crate::traits::OperatorAlgebra;

/// The commutator `[a, b] = ab - ba`.
#[must_use]
pub fn commutator<Op: OperatorAlgebra>(op_a: &Op, op_b: &Op) -> Op {
    let mut result = op_a.composed(op_b);
    result.sub_assign_terms(&op_b.composed(op_a));
    result
}

/// The anticommutator `{a, b} = ab + ba`.
#[must_use]
pub fn anti_commutator<Op: OperatorAlgebra>(op_a: &Op, op_b: &Op) -> Op {
    let mut result = op_a.composed(op_b);
    result.add_assign_terms(&op_b.composed(op_a));
    result
}

/// The symmetrized double commutator, grouped to keep the raw term count
/// down. With `anti == false` this is
/// `abc - cba + (cab - bac + bca - acb) / 2` (every product a concatenation
/// product); with `anti == true` the `c`-outermost products enter with the
/// opposite sign, giving the anticommutator variant.
#[must_use]
pub fn double_commutator<Op: OperatorAlgebra>(op_a: &Op, op_b: &Op, op_c: &Op, anti: bool) -> Op {
    let sign = if anti { Complex64::new(1.0, 0.0) } else { Complex64::new(-1.0, 0.0) };
    let half = Complex64::new(0.5, 0.0);

    let op_ab = op_a.composed(op_b);
    let op_ba = op_b.composed(op_a);
    let op_ac = op_a.composed(op_c);
    let op_ca = op_c.composed(op_a);

    // abc - s*cba
    let mut result = op_ab.composed(op_c);
    result.sub_assign_terms(&op_c.composed(&op_ba).scaled(sign));

    // 1/2 * (-bac + s*cab)
    let mut middle = op_ba.composed(op_c).scaled(Complex64::new(-1.0, 0.0));
    middle.add_assign_terms(&op_c.composed(&op_ab).scaled(sign));

    // 1/2 * -(acb + s*bca)
    let mut last = op_ac.composed(op_b);
    last.add_assign_terms(&op_b.composed(&op_ca).scaled(sign));

    middle.sub_assign_terms(&last);
    result.add_assign_terms(&middle.scaled(half));
    result
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;

    use super::*;
    use crate::action::{ann, cre};
    use crate::operator::FermionOperator;
    use crate::traits::{OperatorAlgebra, SumTerms};

    fn real(value: f64) -> Complex64 {
        Complex64::new(value, 0.0)
    }

    fn number(mode: u32) -> FermionOperator {
        FermionOperator::from_terms([(vec![cre(mode), ann(mode)], real(1.0))])
    }

    fn canonical(operator: &FermionOperator) -> FermionOperator {
        operator.normal_ordered().simplify(1e-12)
    }

    #[test]
    fn commuting_operators_commute() {
        // Number operators on distinct modes commute.
        let result = commutator(&number(0), &number(1));
        assert!(canonical(&result).is_empty());
    }

    #[test]
    fn ladder_anticommutation_relation() {
        // {a_0, a†_0} = 1
        let lowering = FermionOperator::from_terms([(vec![ann(0)], real(1.0))]);
        let raising = FermionOperator::from_terms([(vec![cre(0)], real(1.0))]);
        let result = canonical(&anti_commutator(&lowering, &raising));
        assert!(result.equiv(&FermionOperator::one(), 1e-12));
    }

    #[test]
    fn commutator_with_self_vanishes() {
        let operator = FermionOperator::from_terms([
            (vec![cre(0), ann(1)], real(1.0)),
            (vec![cre(1), ann(0)], real(1.0)),
        ]);
        assert!(canonical(&commutator(&operator, &operator)).is_empty());
    }

    #[test]
    fn commutator_is_antisymmetric() {
        let left = number(0);
        let right = FermionOperator::from_terms([(vec![cre(0), ann(1)], real(1.0))]);
        let forward = canonical(&commutator(&left, &right));
        let backward = canonical(&(-commutator(&right, &left)));
        assert!(forward.equiv(&backward, 1e-12));
    }

    #[test]
    fn double_commutator_matches_its_expansion() {
        let op_a = FermionOperator::from_terms([(vec![cre(0), ann(1)], real(1.0))]);
        let op_b = number(1);
        let op_c = FermionOperator::from_terms([(vec![cre(1), ann(2)], real(0.5))]);

        // With anti == false: abc + cba + (bca - bac - cab - acb) / 2, every
        // product a concatenation chain `x.composed(&y).composed(&z)`.
        let mut expected = op_a.composed(&op_b).composed(&op_c);
        expected.add_assign_terms(&op_c.composed(&op_b).composed(&op_a));
        let mut tail = op_b.composed(&op_c).composed(&op_a);
        tail.sub_assign_terms(&op_b.composed(&op_a).composed(&op_c));
        tail.sub_assign_terms(&op_c.composed(&op_a).composed(&op_b));
        tail.sub_assign_terms(&op_a.composed(&op_c).composed(&op_b));
        expected.add_assign_terms(&tail.scaled(real(0.5)));

        let grouped = canonical(&double_commutator(&op_a, &op_b, &op_c, false));
        assert!(grouped.equiv(&canonical(&expected), 1e-12));
    }

    #[test]
    fn double_commutator_sign_variant_flips_outer_products() {
        let op_a = number(0);
        let op_b = FermionOperator::from_terms([(vec![cre(0), ann(1)], real(1.0))]);
        let op_c = FermionOperator::from_terms([(vec![cre(1), ann(0)], real(1.0))]);

        // With anti == true: abc - cba + (cab - bac - bca - acb) / 2.
        let mut expected = op_a.composed(&op_b).composed(&op_c);
        expected.sub_assign_terms(&op_c.composed(&op_b).composed(&op_a));
        let mut tail = op_c.composed(&op_a).composed(&op_b);
        tail.sub_assign_terms(&op_b.composed(&op_a).composed(&op_c));
        tail.sub_assign_terms(&op_b.composed(&op_c).composed(&op_a));
        tail.sub_assign_terms(&op_a.composed(&op_c).composed(&op_b));
        expected.add_assign_terms(&tail.scaled(real(0.5)));

        let grouped = canonical(&double_commutator(&op_a, &op_b, &op_c, true));
        assert!(grouped.equiv(&canonical(&expected), 1e-12));
    }

    #[test]
    fn raw_commutator_term_count_is_twice_the_product() {
        let left = FermionOperator::from_terms([
            (vec![cre(0), ann(1)], real(1.0)),
            (vec![cre(2), ann(3)], real(2.0)),
        ]);
        let right = FermionOperator::from_terms([
            (vec![cre(1), ann(0)], real(1.0)),
            (vec![cre(3), ann(2)], real(2.0)),
        ]);
        assert_eq!(commutator(&left, &right).len(), 8);
        assert_eq!(anti_commutator(&left, &right).len(), 8);
    }
}
