mod cart_line;
mod catalog_stats;
mod column;
mod product;
mod product_draft;
mod row_action;
mod view_page;
mod view_query;

pub use cart_line::CartLine;
pub use catalog_stats::CatalogStats;
pub use column::{reorder_columns, Column, ColumnOrder};
pub use product::{derive_status, Product, ProductId, ProductStatus};
pub use product_draft::{ProductDraft, ProductPatch};
pub use row_action::RowAction;
pub use view_page::{page_count, ViewPage};
pub use view_query::{SortDirection, SortKey, SortSpec, ViewQuery, ViewQueryParams};
