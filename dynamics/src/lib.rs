#![doc = include_str!("../README.md")]

mod boris;
mod ensemble;
mod error;
mod field_line;
mod guiding_centre;
mod gyron;
mod lorentz;
mod rk4;

pub use boris::{
    CartesianBoris, ClassicalBoris, CurvilinearBoris, boris_push, boris_push_with_electric,
};
pub use ensemble::{Ensemble, PredicatedGyron};
pub use error::DynamicsError;
pub use field_line::FieldLine;
pub use guiding_centre::{GuidingCentre, VppSign};
pub use gyron::Gyron;
pub use lorentz::Lorentz;
pub use rk4::rk4_step;

pub type Result<T> = std::result::Result<T, DynamicsError>;
