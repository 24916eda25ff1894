// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Presentational building blocks (buttons, dialogs, overlay, inputs)
// - search.rs: Search bar and pagination controls
// - product.rs: Product table, rows and the create/edit form

pub mod common;
pub mod product;
pub mod search;

// Re-export commonly used components for convenience
pub use common::*;
pub use product::*;
pub use search::*;
