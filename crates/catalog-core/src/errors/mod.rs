mod catalog_error;
mod column_error;
mod product_error;
mod query_error;

pub use catalog_error::{CatalogError, CatalogResult};
pub use column_error::ColumnError;
pub use product_error::ProductError;
pub use query_error::QueryError;
