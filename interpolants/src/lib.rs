#![doc = include_str!("../README.md")]

mod cache;
mod error;
mod fourier;
mod interp1d;
mod interp2d;

pub use cache::{CachedInterp1d, CachedInterp2d};
pub use error::InterpError;
pub use fourier::FourierComplex;
pub use interp1d::{Interpolant1d, make_interp1d};
pub use interp2d::{Interpolant2d, make_interp2d};

pub type Result<T> = std::result::Result<T, InterpError>;
