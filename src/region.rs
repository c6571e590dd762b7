mod error;
mod factory;
mod record;
mod shape;

#[cfg(test)]
mod tests;

pub use error::{RegionError, Result};
pub use factory::{JsonRegionFactory, RegionFactory};
pub use record::Region;
pub use shape::{RegionPosition, RegionShape};
