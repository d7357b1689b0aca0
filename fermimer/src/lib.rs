pub mod action;
pub use action::{ann, cre, gamma, FermionAction, GeneratorAction, MajoranaAction, PairRule};

pub mod error;
pub use error::{ArithmeticError, LayoutError};

pub mod traits;
pub use traits::{OperatorAlgebra, SumTerms, SumTermsMut};

pub mod operator;
pub use operator::{FermionOperator, FermionTermView, MajoranaOperator, MajoranaTermView};

pub mod mapping;
pub use mapping::{map_generators, map_generators_with, map_term_generators};

pub mod library;

/// Tolerance used when a caller has no better guess.
pub const DEFAULT_ATOL: f64 = 1e-8;
