//! Configuration core for the data-listing widget.
//!
//! The widget lets a user pick a data source, choose which columns to
//! display, and author filter rows; saving serializes those choices into
//! the configuration object the listing component consumes. The heart of
//! the crate is the filter codec: a lossless, bidirectional mapping
//! between the human-facing filter rows (`column` / `operator` / `value` /
//! `ignoreCase`) and the persisted `$eq` / `$iLike` predicates with their
//! SQL-style `%` wildcards.
//!
//! Host capabilities (listing data sources, studio events) stay behind the
//! narrow traits in [`host`], so the codec and the widget state carry no
//! dependency on the host environment.
//!
//! # Example
//! ```
//! use datalist_config::codec;
//! use datalist_config::model::{Filter, FilterOperator};
//!
//! let filter = Filter {
//!     column: "Email".to_string(),
//!     operator: FilterOperator::Contains,
//!     value: "@acme".to_string(),
//!     ignore_case: true,
//! };
//!
//! let entry = codec::encode(&filter);
//! assert_eq!(codec::decode(&entry), filter);
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod host;
pub mod model;
pub mod widget;

pub use codec::{FilterEntry, FilterSet, Predicate};
pub use config::{ListingConfig, SaveResult};
pub use error::Error;
pub use host::{DataSource, DataSourceProvider, HostBridge, HostEvent};
pub use model::{Filter, FilterOperator};
pub use widget::Widget;
