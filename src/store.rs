//! Function store: the console's data-access layer.
//!
//! DESIGN
//! ======
//! `FunctionStore` owns the in-memory record list plus the loading and
//! error flags, and fronts an injected [`FunctionsApi`]. Every mutation is
//! followed by a full list refetch: local state is replaced wholesale by the
//! server's view instead of being patched, so there is no merge logic.
//!
//! ERROR HANDLING
//! ==============
//! Transport and status failures are logged and swallowed. The only failure
//! visible to callers is the generic `error` flag, set when the initial list
//! load fails. `get` reports failure as `None`.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::FunctionsApi;
use crate::clock::{Clock, SystemClock, format_timestamp};
use crate::config::RecordDefaults;
use crate::model::{FunctionRecord, NewFunction};

/// Message shown in place of the table when the initial load fails.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading data!";

pub struct FunctionStore {
    api: Arc<dyn FunctionsApi>,
    clock: Arc<dyn Clock>,
    defaults: RecordDefaults,
    records: Vec<FunctionRecord>,
    loading: bool,
    error: Option<String>,
}

impl FunctionStore {
    #[must_use]
    pub fn new(api: Arc<dyn FunctionsApi>, defaults: RecordDefaults) -> Self {
        Self {
            api,
            clock: Arc::new(SystemClock),
            defaults,
            records: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Replace the timestamp source.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn records(&self) -> &[FunctionRecord] {
        &self.records
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Set only when the initial list load failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// First load when the list view mounts. Failure raises the generic
    /// [`LOAD_ERROR_MESSAGE`]; the cause is only logged.
    pub async fn load_initial(&mut self) -> &[FunctionRecord] {
        self.error = if self.fetch_list().await { None } else { Some(LOAD_ERROR_MESSAGE.to_owned()) };
        &self.records
    }

    /// Refetch the full list. On failure the previous records are kept.
    pub async fn refresh(&mut self) -> &[FunctionRecord] {
        if !self.fetch_list().await {
            debug!(kept = self.records.len(), "keeping previous records");
        }
        &self.records
    }

    /// Returns whether the list was replaced.
    async fn fetch_list(&mut self) -> bool {
        self.loading = true;
        let result = self.api.list().await;
        self.loading = false;
        match result {
            Ok(records) => {
                debug!(count = records.len(), "function list loaded");
                self.records = records;
                true
            }
            Err(e) => {
                warn!(error = %e, "function list fetch failed");
                false
            }
        }
    }

    /// Fetch one record. Any failure yields `None`.
    pub async fn get(&mut self, id: &str) -> Option<FunctionRecord> {
        self.loading = true;
        let result = self.api.get(id).await;
        self.loading = false;
        match result {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, id, "function fetch failed");
                None
            }
        }
    }

    /// Stamp identity and metadata onto the draft, POST it, then refetch.
    pub async fn create(&mut self, draft: NewFunction) {
        let mut record = FunctionRecord::from_draft(Uuid::new_v4().to_string(), draft);
        record.created_by = Some(self.defaults.created_by.clone());
        record.last_modified = Some(self.timestamp());
        record.file_size = Some(self.defaults.file_size.clone());

        match self.api.create(&record).await {
            Ok(()) => {
                debug!(id = %record.id, "function created");
                self.refresh().await;
            }
            Err(e) => warn!(error = %e, id = %record.id, "function create failed"),
        }
    }

    /// Overwrite `lastModified`, PUT the full record, then refetch.
    pub async fn update(&mut self, id: &str, mut record: FunctionRecord) {
        record.last_modified = Some(self.timestamp());

        match self.api.update(id, &record).await {
            Ok(()) => {
                debug!(id, "function updated");
                self.refresh().await;
            }
            Err(e) => warn!(error = %e, id, "function update failed"),
        }
    }

    /// DELETE the record, then refetch.
    pub async fn delete(&mut self, id: &str) {
        match self.api.delete(id).await {
            Ok(()) => {
                debug!(id, "function deleted");
                self.refresh().await;
            }
            Err(e) => warn!(error = %e, id, "function delete failed"),
        }
    }

    /// Flip the `enabled` flag through the normal update path.
    /// Nothing is sent if the record cannot be fetched.
    pub async fn set_enabled(&mut self, id: &str, enabled: bool) {
        let Some(mut record) = self.get(id).await else {
            warn!(id, enabled, "skipping toggle; function not loaded");
            return;
        };
        record.enabled = enabled;
        self.update(id, record).await;
    }

    fn timestamp(&self) -> String {
        format_timestamp(self.clock.now())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
