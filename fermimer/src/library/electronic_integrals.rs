//! Fermionic operators from electronic-structure integrals.
//!
//! The integral slices are flattened lower triangles in the usual
//! quantum-chemistry packing: entry `p*(p+1)/2 + q` (with `p >= q`) holds the
//! matrix element between orbitals `p` and `q`, and the two-body tensor packs
//! pair indices the same way on top. Spin orbitals are laid out with all
//! alpha orbitals first, `0..norb`, then all beta orbitals, `norb..2*norb`.

use num_complex::Complex64;

use crate::action::{ann, cre};
use crate::operator::FermionOperator;
use crate::traits::SumTermsMut;

/// Recovers `(p, q)` with `p >= q` from a flattened triangular index.
fn inflate_index(index: u32) -> (u32, u32) {
    let mut row = 0;
    while (row + 1) * (row + 2) / 2 <= index {
        row += 1;
    }
    (row, index - row * (row + 1) / 2)
}

/// All index quadruples an `ab`-block (4-fold symmetric) entry stands for.
fn expand_s4_index(iajb: u32, npair: u32) -> Vec<(u32, u32, u32, u32)> {
    let (i, a) = inflate_index(iajb / npair);
    let (j, b) = inflate_index(iajb % npair);

    let mut quads = vec![(i, a, j, b)];
    if i > a {
        quads.push((a, i, j, b));
    }
    if j > b {
        quads.push((i, a, b, j));
    }
    if i > a && j > b {
        quads.push((a, i, b, j));
    }
    quads
}

/// All index quadruples an 8-fold symmetric entry stands for.
fn expand_s8_index(iajb: u32) -> Vec<(u32, u32, u32, u32)> {
    let (ia, jb) = inflate_index(iajb);
    let (i, a) = inflate_index(ia);
    let (j, b) = inflate_index(jb);

    let mut quads = expand_s4_index_pair(i, a, j, b);
    if ia > jb {
        quads.extend(expand_s4_index_pair(j, b, i, a));
    }
    quads
}

fn expand_s4_index_pair(i: u32, a: u32, j: u32, b: u32) -> Vec<(u32, u32, u32, u32)> {
    let mut quads = vec![(i, a, j, b)];
    if i > a {
        quads.push((a, i, j, b));
    }
    if j > b {
        quads.push((i, a, b, j));
    }
    if i > a && j > b {
        quads.push((a, i, b, j));
    }
    quads
}

impl FermionOperator {
    /// Appends `coeff * a†_row a_column`, plus the mirrored element when the
    /// indices differ (the triangle stores each off-diagonal element once).
    fn push_1body(&mut self, coeff: Complex64, row: u32, column: u32) {
        self.push_term([cre(row), ann(column)], coeff);
        if row != column {
            self.push_term([cre(column), ann(row)], coeff);
        }
    }

    /// Appends `coeff * a†_i a†_j a_b a_a`.
    fn push_2body(&mut self, coeff: Complex64, i: u32, j: u32, b: u32, a: u32) {
        self.push_term([cre(i), cre(j), ann(b), ann(a)], coeff);
    }

    /// Adds spin-symmetric one-body terms: each triangular entry is applied
    /// to both the alpha and the beta block.
    pub fn add_1body_tril_spin_sym(&mut self, one_body: &[f64], norb: u32) {
        for (index, &value) in one_body.iter().enumerate().filter(|(_, value)| value.abs() > 0.0) {
            let (i, a) = inflate_index(index as u32);
            let coeff = Complex64::new(value, 0.0);
            self.push_1body(coeff, i, a);
            self.push_1body(coeff, i + norb, a + norb);
        }
    }

    #[must_use]
    pub fn from_1body_tril_spin_sym(one_body: &[f64], norb: u32) -> Self {
        let mut operator = Self::default();
        operator.add_1body_tril_spin_sym(one_body, norb);
        operator
    }

    /// Adds spin-resolved one-body terms from separate alpha and beta
    /// triangles.
    pub fn add_1body_tril_spin(&mut self, one_body_a: &[f64], one_body_b: &[f64], norb: u32) {
        for (index, &value) in one_body_a.iter().enumerate().filter(|(_, value)| value.abs() > 0.0) {
            let (i, a) = inflate_index(index as u32);
            self.push_1body(Complex64::new(value, 0.0), i, a);
        }
        for (index, &value) in one_body_b.iter().enumerate().filter(|(_, value)| value.abs() > 0.0) {
            let (i, a) = inflate_index(index as u32);
            self.push_1body(Complex64::new(value, 0.0), i + norb, a + norb);
        }
    }

    #[must_use]
    pub fn from_1body_tril_spin(one_body_a: &[f64], one_body_b: &[f64], norb: u32) -> Self {
        let mut operator = Self::default();
        operator.add_1body_tril_spin(one_body_a, one_body_b, norb);
        operator
    }

    /// Adds spin-symmetric two-body terms from an 8-fold symmetric packed
    /// tensor; each expanded quadruple lands in all four spin sectors.
    pub fn add_2body_tril_spin_sym(&mut self, two_body: &[f64], norb: u32) {
        for (index, &value) in two_body.iter().enumerate().filter(|(_, value)| value.abs() > 0.0) {
            let coeff = Complex64::new(0.5 * value, 0.0);
            for (i, a, j, b) in expand_s8_index(index as u32) {
                self.push_2body(coeff, i, j, b, a);
                self.push_2body(coeff, i + norb, j, b, a + norb);
                self.push_2body(coeff, i, j + norb, b + norb, a);
                self.push_2body(coeff, i + norb, j + norb, b + norb, a + norb);
            }
        }
    }

    #[must_use]
    pub fn from_2body_tril_spin_sym(two_body: &[f64], norb: u32) -> Self {
        let mut operator = Self::default();
        operator.add_2body_tril_spin_sym(two_body, norb);
        operator
    }

    /// Adds spin-resolved two-body terms: 8-fold symmetric alpha-alpha and
    /// beta-beta tensors plus a 4-fold symmetric alpha-beta tensor.
    pub fn add_2body_tril_spin(
        &mut self,
        two_body_aa: &[f64],
        two_body_ab: &[f64],
        two_body_bb: &[f64],
        norb: u32,
    ) {
        for (index, &value) in two_body_aa.iter().enumerate().filter(|(_, value)| value.abs() > 0.0) {
            let coeff = Complex64::new(0.5 * value, 0.0);
            for (i, a, j, b) in expand_s8_index(index as u32) {
                self.push_2body(coeff, i, j, b, a);
            }
        }

        let npair = norb * (norb + 1) / 2;
        for (index, &value) in two_body_ab.iter().enumerate().filter(|(_, value)| value.abs() > 0.0) {
            let coeff = Complex64::new(0.5 * value, 0.0);
            for (i, a, j, b) in expand_s4_index(index as u32, npair) {
                self.push_2body(coeff, i, j + norb, b + norb, a);
                self.push_2body(coeff, j + norb, i, a, b + norb);
            }
        }

        for (index, &value) in two_body_bb.iter().enumerate().filter(|(_, value)| value.abs() > 0.0) {
            let coeff = Complex64::new(0.5 * value, 0.0);
            for (i, a, j, b) in expand_s8_index(index as u32) {
                self.push_2body(coeff, i + norb, j + norb, b + norb, a + norb);
            }
        }
    }

    #[must_use]
    pub fn from_2body_tril_spin(
        two_body_aa: &[f64],
        two_body_ab: &[f64],
        two_body_bb: &[f64],
        norb: u32,
    ) -> Self {
        let mut operator = Self::default();
        operator.add_2body_tril_spin(two_body_aa, two_body_ab, two_body_bb, norb);
        operator
    }
}
