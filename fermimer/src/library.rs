pub mod commutators;
pub mod electronic_integrals;

pub use commutators::{anti_commutator, commutator, double_commutator};
