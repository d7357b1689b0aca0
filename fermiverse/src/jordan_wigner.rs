//! The Jordan-Wigner transform.
//!
//! A ladder action on mode `m` becomes `(X_m ∓ i Y_m) / 2` dressed with a
//! parity string `Z_0 … Z_{m-1}`; a Majorana generator becomes a single
//! dressed `X` or `Y`. Terms are independent under the mapping fold, so they
//! are mapped in parallel and recombined by summation.

use fermimer::mapping::map_term_generators;
use fermimer::{FermionAction, FermionOperator, MajoranaAction, MajoranaOperator, SumTerms};
use num_complex::Complex64;
use rayon::prelude::*;

use crate::qubit::{Axis, QubitOperator};

fn dressed_string(mode: u32, axis: Axis) -> impl Iterator<Item = (u32, Axis)> {
    (0..mode).map(|qubit| (qubit, Axis::Z)).chain([(mode, axis)])
}

fn map_fermion_action(action: FermionAction, num_qubits: u32) -> QubitOperator {
    assert!(action.mode < num_qubits, "mode {} does not fit on {num_qubits} qubits", action.mode);
    let lowering = if action.create { -0.5 } else { 0.5 };
    let mut mapped = QubitOperator::zero(num_qubits);
    mapped.push_term_unchecked(dressed_string(action.mode, Axis::X), Complex64::new(0.5, 0.0));
    mapped.push_term_unchecked(dressed_string(action.mode, Axis::Y), Complex64::new(0.0, lowering));
    mapped
}

fn map_majorana_action(action: MajoranaAction, num_qubits: u32) -> QubitOperator {
    assert!(action.mode() < num_qubits, "mode {} does not fit on {num_qubits} qubits", action.mode());
    let axis = if action.is_prime() { Axis::Y } else { Axis::X };
    let mut mapped = QubitOperator::zero(num_qubits);
    mapped.push_term_unchecked(dressed_string(action.mode(), axis), Complex64::new(1.0, 0.0));
    mapped
}

/// Maps each term through the generic fold on its own rayon task and sums the
/// contributions.
fn mapped_sum<Op>(
    operator: &Op,
    num_qubits: u32,
    map_action: impl Fn(Op::Action, u32) -> QubitOperator + Sync,
) -> QubitOperator
where
    Op: SumTerms + Sync,
{
    (0..operator.len())
        .into_par_iter()
        .map(|term| {
            let folded = map_term_generators(
                operator.term_actions(term),
                |action| map_action(action, num_qubits),
                || QubitOperator::identity(num_qubits),
                |action, accumulator| action & accumulator,
            );
            (folded * operator.coeffs()[term]).simplify(0.0)
        })
        .reduce(|| QubitOperator::zero(num_qubits), |left, right| left + right)
}

/// The Jordan-Wigner transform of a fermionic operator.
///
/// No normal-ordering or global simplification is applied; per-term products
/// are merged, but duplicate Pauli strings from different fermionic terms
/// survive until the caller simplifies.
#[must_use]
pub fn jordan_wigner(operator: &FermionOperator, num_qubits: u32) -> QubitOperator {
    mapped_sum(operator, num_qubits, map_fermion_action)
}

/// The Jordan-Wigner transform of a Majorana operator.
#[must_use]
pub fn jordan_wigner_majorana(operator: &MajoranaOperator, num_qubits: u32) -> QubitOperator {
    mapped_sum(operator, num_qubits, map_majorana_action)
}
