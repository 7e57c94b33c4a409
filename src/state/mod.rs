//! View state for the console's two screens.
//!
//! DESIGN
//! ======
//! The list view and the edit/create form are plain structs driven by
//! method calls, independent of any renderer. They talk to the server only
//! through a borrowed [`FunctionStore`](crate::store::FunctionStore) and
//! express navigation as a returned [`Route`] rather than performing it.

pub mod form;
pub mod list;

/// Where the operator goes next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// The function table.
    List,
    /// A blank form.
    Create,
    /// The form pre-loaded with this function's id.
    Edit(String),
}
