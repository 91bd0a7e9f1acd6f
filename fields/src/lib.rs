#![doc = include_str!("../README.md")]

mod cache;
mod castor;
mod circular;
mod dipole;
mod error;
mod field;
mod helena;
mod linear_combo;
mod near_axis;
mod vmec;

pub use cache::FieldCacheC1;
pub use castor::{CastorEigenmodeA, CastorEigenmodeB, CastorEigenmodeE};
pub use circular::EquilibriumCircular;
pub use dipole::DipoleCurrentSheet;
pub use error::FieldError;
pub use field::{IR3Field, IR3FieldC1, same_metric};
pub use helena::EquilibriumHelena;
pub use linear_combo::{LinearCombo, LinearComboC1};
pub use near_axis::EquilibriumNearAxis;
pub use vmec::EquilibriumVmec;

pub type Result<T> = std::result::Result<T, FieldError>;
