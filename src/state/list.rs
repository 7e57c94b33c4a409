//! Function table state: rows, the per-row action menu, delete confirmation.
//!
//! DESIGN
//! ======
//! At most one row's action menu is open; opening another closes the first.
//! Delete is two-phase: `request_delete` only opens the prompt, and the
//! store is touched exclusively by `confirm_delete`.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use super::Route;
use crate::model::FunctionRecord;
use crate::store::FunctionStore;

pub const DELETE_CONFIRMATION_MESSAGE: &str =
    "Are you sure that you want to delete this function? This action cannot be undone.";

/// One table row. Missing metadata renders as an empty cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRow {
    pub id: String,
    pub name: String,
    pub created_by: String,
    pub last_modified: String,
    pub file_size: String,
    pub enabled: bool,
}

impl From<&FunctionRecord> for ListRow {
    fn from(record: &FunctionRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            created_by: record.created_by.clone().unwrap_or_default(),
            last_modified: record.last_modified.clone().unwrap_or_default(),
            file_size: record.file_size.clone().unwrap_or_default(),
            enabled: record.enabled,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListView {
    open_menu: Option<String>,
    pending_delete: Option<String>,
}

impl ListView {
    #[must_use]
    pub fn rows(records: &[FunctionRecord]) -> Vec<ListRow> {
        records.iter().map(ListRow::from).collect()
    }

    /// Id of the row whose action menu is open.
    #[must_use]
    pub fn open_menu(&self) -> Option<&str> {
        self.open_menu.as_deref()
    }

    #[must_use]
    pub fn is_menu_open(&self, id: &str) -> bool {
        self.open_menu.as_deref() == Some(id)
    }

    /// Open this row's menu, or close it if it is already open.
    pub fn toggle_menu(&mut self, id: &str) {
        if self.is_menu_open(id) {
            self.open_menu = None;
        } else {
            self.open_menu = Some(id.to_owned());
        }
    }

    pub fn close_menu(&mut self) {
        self.open_menu = None;
    }

    /// "Add new function".
    #[must_use]
    pub fn create(&mut self) -> Route {
        self.close_menu();
        Route::Create
    }

    /// The Edit menu entry.
    #[must_use]
    pub fn edit(&mut self, id: &str) -> Route {
        self.close_menu();
        Route::Edit(id.to_owned())
    }

    /// The Delete menu entry: close the menu and ask for confirmation.
    pub fn request_delete(&mut self, id: &str) {
        self.close_menu();
        self.pending_delete = Some(id.to_owned());
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    #[must_use]
    pub fn is_confirm_open(&self) -> bool {
        self.pending_delete.is_some()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the pending selection and refresh through the store.
    /// Returns whether a delete was issued.
    pub async fn confirm_delete(&mut self, store: &mut FunctionStore) -> bool {
        let Some(id) = self.pending_delete.take() else {
            return false;
        };
        store.delete(&id).await;
        true
    }
}
