pub mod products;

pub use products::{Product, ProductsResponse};
