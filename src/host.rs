//! Capability interfaces for the host platform.
//!
//! The widget core never calls the studio directly: data source listing
//! and event emission go through these traits, injected by whatever glue
//! embeds the widget. Everything is synchronous; the core has no
//! concurrency of its own.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A data source the listing can be bound to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub columns: Vec<String>,
}

/// Events the widget raises for the studio to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// The user picked a different data source (`None` when cleared).
    DataSourceChanged(Option<DataSource>),
    /// The user switched display modes.
    ModeChanged(usize),
}

/// Lists the data sources the widget can offer.
pub trait DataSourceProvider {
    fn data_sources(&self) -> Result<Vec<DataSource>, Error>;
}

/// Sink for widget events the host studio subscribes to.
pub trait HostBridge {
    fn emit(&mut self, event: HostEvent);
}
