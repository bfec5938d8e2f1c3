//! District polygon store.
//!
//! Districts are named administrative polygons supplied by the host at
//! startup. The engine only ever reads them: every lookup borrows from a
//! single `DistrictStore` resource.

mod dataset;
mod types;

#[cfg(test)]
mod tests;

pub use dataset::DistrictRecord;
pub use types::{District, DistrictCensus, DistrictStore};
