//! Edit/create form state for one function definition.
//!
//! DESIGN
//! ======
//! One form serves both flows; the presence of an id selects update over
//! create. The form edits a local `NewFunction` draft. When editing, the
//! loaded record is kept as the base so its id and metadata travel back in
//! the PUT.
//!
//! VALIDATION
//! ==========
//! Required-field presence only: name, description and the lambda reference
//! on the record; name, type and description on each parameter. A failed
//! validation blocks submit before any network call.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use super::Route;
use crate::model::{FunctionRecord, NewFunction, Parameter};
use crate::store::FunctionStore;

pub const NAME_REQUIRED: &str = "Function name is required.";
pub const DESCRIPTION_REQUIRED: &str = "Function description is required.";
pub const LAMBDA_REQUIRED: &str = "Lambda function ARN is required.";
pub const PARAMETER_INCOMPLETE: &str = "Parameter must have a name, type, and description.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionField {
    Name,
    Description,
    LambdaFunction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterField {
    Name,
    Type,
    Description,
    /// Comma-separated allowed values.
    Enum,
}

/// Inline errors for the record-level fields. `None` means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub description: Option<String>,
    pub lambda_function: Option<String>,
}

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.lambda_function.is_none()
    }
}

#[derive(Clone, Debug, Default)]
pub struct FunctionForm {
    id: Option<String>,
    base: Option<FunctionRecord>,
    draft: NewFunction,
    errors: FormErrors,
    parameter_errors: Vec<Option<String>>,
}

impl FunctionForm {
    /// An edit form when `id` is set, otherwise a blank create form.
    #[must_use]
    pub fn new(id: Option<String>) -> Self {
        Self { id, ..Self::default() }
    }

    /// Form for a navigation target. `Route::List` yields a create form.
    #[must_use]
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::Edit(id) => Self::new(Some(id.clone())),
            Route::Create | Route::List => Self::new(None),
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.is_edit() { "Edit Function" } else { "Add New Function" }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() { "Save Changes" } else { "Add Function" }
    }

    #[must_use]
    pub fn draft(&self) -> &NewFunction {
        &self.draft
    }

    #[must_use]
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// One entry per parameter, `None` when that parameter is valid.
    #[must_use]
    pub fn parameter_errors(&self) -> &[Option<String>] {
        &self.parameter_errors
    }

    /// Replace the draft with the stored record when editing.
    /// Returns `false` if there is nothing to load or the fetch failed.
    pub async fn load(&mut self, store: &mut FunctionStore) -> bool {
        let Some(id) = self.id.clone() else {
            return false;
        };
        let Some(record) = store.get(&id).await else {
            return false;
        };
        self.draft = record.to_draft();
        self.base = Some(record);
        self.parameter_errors.clear();
        true
    }

    // =========================================================================
    // FIELD EDITS
    // =========================================================================

    pub fn set_field(&mut self, field: FunctionField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FunctionField::Name => self.draft.name = value,
            FunctionField::Description => self.draft.description = value,
            FunctionField::LambdaFunction => self.draft.lambda_function = value,
        }
    }

    pub fn toggle_enabled(&mut self) {
        self.draft.enabled = !self.draft.enabled;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.draft.enabled = enabled;
    }

    /// Append a blank, optional parameter.
    pub fn add_parameter(&mut self) {
        self.draft.parameters.push(Parameter::default());
    }

    /// Append a prepared parameter.
    pub fn push_parameter(&mut self, parameter: Parameter) {
        self.draft.parameters.push(parameter);
    }

    /// Remove the parameter at `index`; out-of-range indices are ignored.
    pub fn remove_parameter(&mut self, index: usize) -> Option<Parameter> {
        if index >= self.draft.parameters.len() {
            return None;
        }
        if index < self.parameter_errors.len() {
            self.parameter_errors.remove(index);
        }
        Some(self.draft.parameters.remove(index))
    }

    pub fn set_parameter_field(&mut self, index: usize, field: ParameterField, value: &str) {
        let Some(param) = self.draft.parameters.get_mut(index) else {
            return;
        };
        match field {
            ParameterField::Name => param.name = value.to_owned(),
            ParameterField::Type => param.kind = value.to_owned(),
            ParameterField::Description => param.description = value.to_owned(),
            ParameterField::Enum => param.enum_values = Parameter::parse_enum_list(value),
        }
    }

    pub fn set_parameter_required(&mut self, index: usize, required: bool) {
        if let Some(param) = self.draft.parameters.get_mut(index) {
            param.required = required;
        }
    }

    // =========================================================================
    // VALIDATION & SUBMIT
    // =========================================================================

    /// Recompute inline errors. Returns whether the draft may be submitted.
    pub fn validate(&mut self) -> bool {
        let draft = &self.draft;
        self.errors = FormErrors {
            name: draft.name.is_empty().then(|| NAME_REQUIRED.to_owned()),
            description: draft.description.is_empty().then(|| DESCRIPTION_REQUIRED.to_owned()),
            lambda_function: draft.lambda_function.is_empty().then(|| LAMBDA_REQUIRED.to_owned()),
        };
        self.parameter_errors = draft
            .parameters
            .iter()
            .map(|param| (!param.is_complete()).then(|| PARAMETER_INCOMPLETE.to_owned()))
            .collect();

        self.errors.is_empty() && self.parameter_errors.iter().all(Option::is_none)
    }

    /// Validate, then update (edit) or create, and head back to the list.
    /// Returns `None` without touching the store when validation fails.
    pub async fn submit(&mut self, store: &mut FunctionStore) -> Option<Route> {
        if !self.validate() {
            return None;
        }
        match &self.id {
            Some(id) => store.update(id, self.to_record(id)).await,
            None => store.create(self.draft.clone()).await,
        }
        Some(Route::List)
    }

    fn to_record(&self, id: &str) -> FunctionRecord {
        match &self.base {
            Some(base) => {
                let mut record = base.clone();
                record.id = id.to_owned();
                record.apply_draft(self.draft.clone());
                record
            }
            None => FunctionRecord::from_draft(id.to_owned(), self.draft.clone()),
        }
    }
}
