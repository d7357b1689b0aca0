//! Operator sugar over the algebra traits.
//!
//! `&` is the concatenation product: `a & b` is "first apply `a`, then `b`",
//! matching circuit-style left-to-right composition. All operators take their
//! operands by value; clone explicitly to keep the original.

use std::ops::{Add, AddAssign, BitAnd, BitAndAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_complex::Complex64;

use super::{FermionOperator, MajoranaOperator};
use crate::traits::OperatorAlgebra;

impl Add for FermionOperator {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self.add_assign_terms(&other);
        self
    }
}

impl AddAssign for FermionOperator {
    fn add_assign(&mut self, other: Self) {
        self.add_assign_terms(&other);
    }
}

impl Sub for FermionOperator {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self.sub_assign_terms(&other);
        self
    }
}

impl SubAssign for FermionOperator {
    fn sub_assign(&mut self, other: Self) {
        self.sub_assign_terms(&other);
    }
}

impl Mul<Complex64> for FermionOperator {
    type Output = Self;

    fn mul(mut self, factor: Complex64) -> Self {
        self.scale_assign(factor);
        self
    }
}

impl Mul<FermionOperator> for Complex64 {
    type Output = FermionOperator;

    fn mul(self, operator: FermionOperator) -> FermionOperator {
        operator * self
    }
}

impl MulAssign<Complex64> for FermionOperator {
    fn mul_assign(&mut self, factor: Complex64) {
        self.scale_assign(factor);
    }
}

impl Div<Complex64> for FermionOperator {
    type Output = Self;

    fn div(self, divisor: Complex64) -> Self {
        assert_ne!(divisor, Complex64::new(0.0, 0.0), "cannot divide an operator by zero");
        self * (1.0 / divisor)
    }
}

impl DivAssign<Complex64> for FermionOperator {
    fn div_assign(&mut self, divisor: Complex64) {
        assert_ne!(divisor, Complex64::new(0.0, 0.0), "cannot divide an operator by zero");
        self.scale_assign(1.0 / divisor);
    }
}

impl Neg for FermionOperator {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.scale_assign(Complex64::new(-1.0, 0.0));
        self
    }
}

impl BitAnd for FermionOperator {
    type Output = Self;

    fn bitand(mut self, other: Self) -> Self {
        self.compose_assign(&other);
        self
    }
}

impl BitAndAssign for FermionOperator {
    fn bitand_assign(&mut self, other: Self) {
        self.compose_assign(&other);
    }
}

impl Add for MajoranaOperator {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self.add_assign_terms(&other);
        self
    }
}

impl AddAssign for MajoranaOperator {
    fn add_assign(&mut self, other: Self) {
        self.add_assign_terms(&other);
    }
}

impl Sub for MajoranaOperator {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self.sub_assign_terms(&other);
        self
    }
}

impl SubAssign for MajoranaOperator {
    fn sub_assign(&mut self, other: Self) {
        self.sub_assign_terms(&other);
    }
}

impl Mul<Complex64> for MajoranaOperator {
    type Output = Self;

    fn mul(mut self, factor: Complex64) -> Self {
        self.scale_assign(factor);
        self
    }
}

impl Mul<MajoranaOperator> for Complex64 {
    type Output = MajoranaOperator;

    fn mul(self, operator: MajoranaOperator) -> MajoranaOperator {
        operator * self
    }
}

impl MulAssign<Complex64> for MajoranaOperator {
    fn mul_assign(&mut self, factor: Complex64) {
        self.scale_assign(factor);
    }
}

impl Div<Complex64> for MajoranaOperator {
    type Output = Self;

    fn div(self, divisor: Complex64) -> Self {
        assert_ne!(divisor, Complex64::new(0.0, 0.0), "cannot divide an operator by zero");
        self * (1.0 / divisor)
    }
}

impl DivAssign<Complex64> for MajoranaOperator {
    fn div_assign(&mut self, divisor: Complex64) {
        assert_ne!(divisor, Complex64::new(0.0, 0.0), "cannot divide an operator by zero");
        self.scale_assign(1.0 / divisor);
    }
}

impl Neg for MajoranaOperator {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.scale_assign(Complex64::new(-1.0, 0.0));
        self
    }
}

impl BitAnd for MajoranaOperator {
    type Output = Self;

    fn bitand(mut self, other: Self) -> Self {
        self.compose_assign(&other);
        self
    }
}

impl BitAndAssign for MajoranaOperator {
    fn bitand_assign(&mut self, other: Self) {
        self.compose_assign(&other);
    }
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;

    use crate::action::{ann, cre};
    use crate::operator::FermionOperator;
    use crate::traits::{OperatorAlgebra, SumTerms};

    fn real(value: f64) -> Complex64 {
        Complex64::new(value, 0.0)
    }

    #[test]
    fn addition_concatenates_terms() {
        let left = FermionOperator::from_terms([(vec![cre(0)], real(1.0))]);
        let right = FermionOperator::from_terms([(vec![ann(1)], real(2.0))]);
        let sum = left + right;
        assert_eq!(sum.len(), 2);
        assert_eq!(sum.coeffs(), &[real(1.0), real(2.0)]);
    }

    #[test]
    fn subtraction_negates_the_right_operand() {
        let operator = FermionOperator::from_terms([(vec![cre(0)], real(1.0))]);
        let difference = operator.clone() - operator;
        assert_eq!(difference.coeffs(), &[real(1.0), real(-1.0)]);
        assert_eq!(difference.simplify(1e-12), FermionOperator::zero());
    }

    #[test]
    fn scalar_multiplication_commutes() {
        let operator = FermionOperator::from_terms([(vec![cre(0)], Complex64::new(1.0, 1.0))]);
        let factor = Complex64::new(0.0, 2.0);
        assert_eq!(operator.clone() * factor, factor * operator.clone());
        assert_eq!((operator * factor).coeffs(), &[Complex64::new(-2.0, 2.0)]);
    }

    #[test]
    fn division_inverts_multiplication() {
        let operator = FermionOperator::from_terms([(vec![cre(0)], real(3.0))]);
        assert_eq!((operator.clone() * real(2.0)) / real(2.0), operator);
    }

    #[test]
    #[should_panic(expected = "divide an operator by zero")]
    fn division_by_zero_panics() {
        let operator = FermionOperator::one();
        let _ = operator / Complex64::new(0.0, 0.0);
    }

    #[test]
    fn checked_division_by_zero_errors() {
        use crate::error::ArithmeticError;
        let operator = FermionOperator::one();
        assert_eq!(operator.checked_div(Complex64::new(0.0, 0.0)), Err(ArithmeticError::DivisionByZero));
        assert_eq!(operator.checked_div(real(2.0)).unwrap().coeffs(), &[real(0.5)]);
    }

    #[test]
    fn composition_stores_right_then_left() {
        // (2 + 3 a†_0 a_1) & (1.5 + 4 a†_1 a_0), raw terms, no merging.
        let left = FermionOperator::from_terms([
            (vec![], real(2.0)),
            (vec![cre(0), ann(1)], real(3.0)),
        ]);
        let right = FermionOperator::from_terms([
            (vec![], real(1.5)),
            (vec![cre(1), ann(0)], real(4.0)),
        ]);
        let product = left & right;
        let expected = FermionOperator::from_terms([
            (vec![], real(3.0)),
            (vec![cre(1), ann(0)], real(8.0)),
            (vec![cre(0), ann(1)], real(4.5)),
            (vec![cre(1), ann(0), cre(0), ann(1)], real(12.0)),
        ]);
        assert_eq!(product, expected);
    }

    #[test]
    fn composition_with_identity_is_identity() {
        let operator = FermionOperator::from_terms([(vec![cre(0), ann(1)], Complex64::new(1.0, -1.0))]);
        assert_eq!(operator.clone() & FermionOperator::one(), operator);
        assert_eq!(FermionOperator::one() & operator.clone(), operator);
    }

    #[test]
    fn zero_annihilates_composition() {
        let operator = FermionOperator::from_terms([(vec![cre(0)], real(2.0))]);
        assert_eq!(operator.clone() & FermionOperator::zero(), FermionOperator::zero());
        assert_eq!(FermionOperator::zero() & operator, FermionOperator::zero());
    }

    #[test]
    fn pow_repeats_composition() {
        let operator = FermionOperator::from_terms([(vec![cre(0)], real(2.0))]);
        assert_eq!(operator.pow(0), FermionOperator::one());
        assert_eq!(operator.pow(1), operator.clone() & FermionOperator::one());
        let squared = operator.pow(2);
        assert_eq!(squared.len(), 1);
        assert_eq!(squared.coeffs(), &[real(4.0)]);
        assert_eq!(squared.term_actions(0).collect::<Vec<_>>(), vec![cre(0), cre(0)]);
    }

    #[test]
    fn negation_flips_every_coefficient() {
        let operator = FermionOperator::from_terms([
            (vec![cre(0)], real(1.0)),
            (vec![ann(1)], Complex64::new(0.0, -2.0)),
        ]);
        assert_eq!((-operator).coeffs(), &[real(-1.0), Complex64::new(0.0, 2.0)]);
    }
}
