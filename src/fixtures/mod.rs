// fixtures/mod.rs - Reusable sample data
//
// A fixture is setup data written once and reused: the integration tests
// seed their mock products service from here, so every suite works
// against the same catalog.

pub mod products;

pub use products::ProductsSeed;

/// A named set of records a test backend can be seeded with
pub trait SeedData {
    type Record;

    /// The records, in the order the backend should list them
    fn records() -> Vec<Self::Record>;
}
