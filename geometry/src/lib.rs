#![doc = include_str!("../README.md")]

mod cache;
mod cartesian;
mod connected;
mod cylindrical;
mod error;
mod helena;
mod metric;
mod morphism;
mod multiroot;
mod near_axis;
mod polar_torus;
mod spherical;
mod vmec;

pub use cache::{MetricCache, MorphismCache};
pub use cartesian::{MetricCartesian, MorphismCartesian};
pub use connected::MetricConnected;
pub use cylindrical::{MetricCylindrical, MorphismCylindrical};
pub use error::GeometryError;
pub use helena::{MetricHelena, MorphismHelena};
pub use metric::{ConnectedMetric, CovariantMetric};
pub use morphism::Morphism;
pub use multiroot::Multiroot;
pub use near_axis::MetricNearAxis;
pub use polar_torus::{MetricPolarTorus, MorphismPolarTorus};
pub use spherical::{MetricSpherical, MorphismSpherical};
pub use vmec::{MetricVmec, MorphismVmec};

pub type Result<T> = std::result::Result<T, GeometryError>;
