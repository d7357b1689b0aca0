//! Concrete mappers from fermionic and Majorana operator algebras into qubit
//! representations, built on `fermimer`'s generic mapping fold.

pub mod qubit;
pub use qubit::{Axis, QubitLayoutError, QubitOperator, QubitTermView};

pub mod jordan_wigner;
pub use jordan_wigner::{jordan_wigner, jordan_wigner_majorana};

pub mod majorana_fermion;
pub use majorana_fermion::{fermion_to_majorana, majorana_to_fermion};
