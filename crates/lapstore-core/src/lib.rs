pub mod app_config;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod metrics;
pub mod notify;
pub mod paging;
pub mod products;
pub mod query;
pub mod session;

pub use app_config::{AppConfig, Environment};
pub use catalog::{Brand, FilterCategory};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{CatalogError, ConfigError};
pub use filters::{FilterState, FilterStore, FilterUpdate, PriceRange, WeightRange};
pub use metrics::{compact_number, OrderCountPoint, RevenuePoint, SalesMetrics, StatusSlice};
pub use notify::{NoticeLevel, Notifier, TracingNotifier};
pub use paging::{DisplayRange, ListingSort, PageSize, Pagination, SearchSort};
pub use products::{format_price, ProductDisplayRecord};
pub use query::{
    build_filter_query, build_search_query, encode_component, normalize_filter_value, ListingQuery,
};
pub use session::{MemorySession, SessionStore, UserProfile};
