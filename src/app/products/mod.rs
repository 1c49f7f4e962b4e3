pub mod handler;
pub mod model;
pub mod service;

pub use handler::AppState;
pub use model::{ListQuery, NewProduct, Product, ProductPatch};
pub use service::ProductService;
