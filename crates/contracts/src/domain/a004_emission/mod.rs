pub mod aggregate;

pub use aggregate::{Emission, EmissionId};
