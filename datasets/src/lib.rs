#![doc = include_str!("../README.md")]

mod castor;
mod error;
mod helena;
mod vmec;

pub use castor::CastorDataset;
pub use error::DatasetError;
pub use helena::{HelenaDataset, HelenaRaw};
pub use vmec::VmecDataset;

pub type Result<T> = std::result::Result<T, DatasetError>;
