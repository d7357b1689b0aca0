use num_complex::Complex64;
use smallvec::SmallVec;

use crate::action::{GeneratorAction, PairRule};
use crate::traits::SumTermsMut;

type Actions<A> = SmallVec<[A; 8]>;

/// Rewrites one term into canonical order, pushing the resulting terms into
/// `out`.
///
/// The rewrite is an adjacent-transposition bubble over the action sequence.
/// Each swap of anticommuting generators negates the term; a contraction
/// additionally spawns the term with the pair removed, which is queued and
/// rewritten in turn. A term recognized as algebraically zero is abandoned
/// without emitting anything.
pub(crate) fn normal_order_term<Op>(actions: impl Iterator<Item = Op::Action>, coeff: Complex64, out: &mut Op)
where
    Op: SumTermsMut,
{
    let mut pending: Vec<(Actions<Op::Action>, Complex64)> = vec![(actions.collect(), coeff)];
    'terms: while let Some((mut term, coeff)) = pending.pop() {
        let mut negated = false;
        for sorted in 1..term.len() {
            for position in (1..=sorted).rev() {
                match Op::Action::reorder(term[position - 1], term[position]) {
                    PairRule::InOrder => {}
                    PairRule::Exchange => {
                        term.swap(position - 1, position);
                        negated = !negated;
                    }
                    PairRule::ExchangeContract => {
                        let mut contracted = Actions::new();
                        contracted.extend_from_slice(&term[..position - 1]);
                        contracted.extend_from_slice(&term[position + 1..]);
                        pending.push((contracted, if negated { -coeff } else { coeff }));
                        term.swap(position - 1, position);
                        negated = !negated;
                    }
                    PairRule::Vanish => continue 'terms,
                }
            }
        }
        out.push_term(term, if negated { -coeff } else { coeff });
    }
}
