mod arithmetic;
pub mod fermion;
pub mod majorana;
mod normal_order;

pub use fermion::{FermionOperator, FermionTermView};
pub use majorana::{MajoranaOperator, MajoranaTermView};
