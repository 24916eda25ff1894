// web_app/pages/mod.rs - Page components module
//
// - ProductsPage: catalog listing with search, create, edit and delete

pub mod products;

// Re-export page components
pub use products::ProductsPage;
