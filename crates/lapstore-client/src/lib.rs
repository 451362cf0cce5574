pub mod analytics;
pub mod catalog;
pub mod client;
pub mod error;
pub mod normalize;
pub mod search;
pub mod sequence;
pub mod types;

pub use analytics::{aggregate_orders, load_sales_metrics, parse_order_timestamp};
pub use catalog::CatalogPage;
pub use client::{normalize_base_url, StorefrontClient};
pub use error::ClientError;
pub use normalize::{transform_product, transform_products, ImageLocator, ProductImages};
pub use search::{SearchPage, SearchParams};
pub use sequence::FetchTicket;
pub use types::{ListingResponse, OrderRecord, RawProduct};
