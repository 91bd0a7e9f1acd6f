#![doc = include_str!("../README.md")]

mod contraction;
mod deriv;
mod ir3;
mod sm3;

pub mod codata;

pub use contraction::*;
pub use deriv::{DDIR3, DIR3};
pub use ir3::IR3;
pub use sm3::{DSM3, SM3};
