//! Widget state and orchestration.
//!
//! Mirrors the editor lifecycle: replay a previously persisted
//! configuration, track the user's edits, and compute the result object
//! on save. All host interaction goes through the [`crate::host`] traits.

use tracing::{debug, warn};

use crate::codec;
use crate::codec::FilterSet;
use crate::config::{ListingConfig, SaveResult};
use crate::error::Error;
use crate::host::{DataSource, DataSourceProvider, HostBridge, HostEvent};
use crate::model::{ColumnSelection, Filter, Mode, SelectedColumns, Settings, columns_compact};

/// Editor state for one widget instance.
#[derive(Debug)]
pub struct Widget<B: HostBridge> {
    settings: Settings,
    bridge: B,
    selected_data_source: Option<DataSource>,
    persisted_data_source_id: Option<i64>,
    selected_columns: SelectedColumns,
    filters: Vec<Filter>,
    apply_filters: bool,
    show_filters: bool,
    selected_mode_idx: usize,
}

impl<B: HostBridge> Widget<B> {
    pub fn new(mut settings: Settings, bridge: B) -> Self {
        settings.normalize();
        Widget {
            settings,
            bridge,
            selected_data_source: None,
            persisted_data_source_id: None,
            selected_columns: SelectedColumns::default(),
            filters: Vec::new(),
            apply_filters: false,
            show_filters: false,
            selected_mode_idx: 0,
        }
    }

    /// Replay a previously persisted configuration.
    ///
    /// The value is parsed and every `filters.$and` entry decoded before
    /// any state changes, so a format error leaves the widget exactly as
    /// it was.
    pub fn load(&mut self, value: serde_json::Value) -> Result<(), Error> {
        let config = ListingConfig::from_value(value)?;
        self.apply_filters = config.apply_filters;
        self.persisted_data_source_id = config.data_source_id;
        self.selected_columns = config.columns;
        // Settings may have fewer modes than when the config was saved.
        self.selected_mode_idx = config.selected_mode_idx.min(self.settings.modes.len() - 1);
        self.filters = codec::decode_set(&config.filters);
        debug!(filters = self.filters.len(), "restored persisted configuration");
        Ok(())
    }

    /// Fetch the data source list from the host and re-select the
    /// persisted one, if it still exists.
    pub fn restore_data_source<P: DataSourceProvider>(&mut self, provider: &P) -> Result<(), Error> {
        let sources = provider.data_sources()?;
        let Some(id) = self.persisted_data_source_id else {
            return Ok(());
        };
        match sources.into_iter().find(|s| s.id == id) {
            Some(source) => self.select_data_source(Some(source)),
            None => warn!(id, "persisted data source no longer exists"),
        }
        Ok(())
    }

    /// Point the widget at a different data source.
    ///
    /// Switching between two real sources throws away the columns and
    /// filters authored for the old one; the host is notified either way.
    pub fn select_data_source(&mut self, source: Option<DataSource>) {
        let switched = match (&self.selected_data_source, &source) {
            (Some(old), Some(new)) => old.id != new.id,
            _ => false,
        };
        if switched {
            debug!("data source switched, resetting columns and filters");
            self.selected_columns.clear();
            self.filters.clear();
        }
        self.selected_data_source = source.clone();
        self.bridge.emit(HostEvent::DataSourceChanged(source));
        self.refill_filters();
    }

    /// Switch display modes.
    pub fn select_mode(&mut self, idx: usize) -> Result<(), Error> {
        if idx >= self.settings.modes.len() {
            return Err(Error::ModeOutOfRange(idx));
        }
        self.selected_mode_idx = idx;
        self.bridge.emit(HostEvent::ModeChanged(idx));
        Ok(())
    }

    /// Turn filtering on or off. Turning it on with no rows yet inserts
    /// the default row; the editor visibility follows the flag.
    pub fn set_apply_filters(&mut self, apply: bool) {
        self.apply_filters = apply;
        if apply && self.filters.is_empty() {
            self.add_default_filter();
        }
        self.show_filters = apply;
    }

    /// Show or hide the filter editor; `None` toggles.
    pub fn toggle_filters(&mut self, show: Option<bool>) {
        self.show_filters = show.unwrap_or(!self.show_filters);
        self.refill_filters();
    }

    /// Insert the default row: exact, case-sensitive match on the
    /// source's first column.
    pub fn add_default_filter(&mut self) {
        let column = self
            .selected_data_source
            .as_ref()
            .and_then(|s| s.columns.first())
            .cloned()
            .unwrap_or_default();
        self.filters.push(Filter::default_for_column(column));
    }

    pub fn remove_filter(&mut self, idx: usize) {
        if idx < self.filters.len() {
            self.filters.remove(idx);
        }
        self.refill_filters();
    }

    // An open editor never shows an empty list while a source is bound.
    fn refill_filters(&mut self) {
        if self.filters.is_empty() && self.show_filters && self.selected_data_source.is_some() {
            self.add_default_filter();
        }
    }

    /// Set or clear one key of the selected-columns mapping. An empty
    /// selection removes the key, matching how the editor's inputs report
    /// a cleared field.
    pub fn update_selected_columns(&mut self, key: &str, selection: Option<ColumnSelection>) {
        match selection {
            Some(selection) if !selection.is_empty() => {
                self.selected_columns.insert(key.to_string(), selection);
            }
            _ => {
                self.selected_columns.shift_remove(key);
            }
        }
    }

    /// Compute the save-boundary value. Never panics: failures degrade to
    /// a diagnostic string the host stores in place of the configuration.
    pub fn result(&self) -> SaveResult {
        match self.build_config() {
            Ok(config) => SaveResult::Config(config),
            Err(err) => {
                warn!(%err, "unable to compute result");
                SaveResult::Diagnostic(format!("Unable to compute result: {err}"))
            }
        }
    }

    fn build_config(&self) -> Result<ListingConfig, Error> {
        let source = self.selected_data_source.as_ref().ok_or(Error::NoDataSource)?;
        let filters = if self.apply_filters {
            codec::encode_set(&self.filters)
        } else {
            FilterSet::default()
        };
        Ok(ListingConfig {
            apply_filters: self.apply_filters,
            data_source_id: Some(source.id),
            selected_mode_idx: self.selected_mode_idx,
            columns: self.selected_columns.clone(),
            columns_compact: columns_compact(&self.selected_columns),
            filters,
        })
    }

    // ==================== Accessors ====================

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn selected_mode(&self) -> &Mode {
        // normalize() guarantees at least one mode and load() clamps.
        &self.settings.modes[self.selected_mode_idx]
    }

    pub fn selected_mode_idx(&self) -> usize {
        self.selected_mode_idx
    }

    pub fn selected_data_source(&self) -> Option<&DataSource> {
        self.selected_data_source.as_ref()
    }

    pub fn selected_columns(&self) -> &SelectedColumns {
        &self.selected_columns
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Mutable access for row edits made in the filter editor.
    pub fn filters_mut(&mut self) -> &mut Vec<Filter> {
        &mut self.filters
    }

    pub fn apply_filters(&self) -> bool {
        self.apply_filters
    }

    pub fn show_filters(&self) -> bool {
        self.show_filters
    }

    /// Placeholder text for the column dropdowns when nothing can be
    /// listed yet.
    pub fn column_warning(&self) -> &'static str {
        if self.selected_data_source.is_some() {
            "-- No columns/fields found"
        } else {
            "-- Please select a data source"
        }
    }
}
