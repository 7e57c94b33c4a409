//! Command-line front end: clap definitions and the command runners.
//!
//! DESIGN
//! ======
//! Each subcommand drives the same view state a graphical console would:
//! `list` mounts the list view, `create`/`edit` fill and submit a
//! `FunctionForm`, `delete` goes through the list view's confirmation step.
//! Output goes to an injected writer and confirmation to an injected
//! prompt, so runners are testable without a terminal.

#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use tracing::{debug, warn};

use crate::api::ApiError;
use crate::config::{ConfigError, ConsoleConfig};
use crate::model::Parameter;
use crate::render::{render_form_errors, render_record, render_table};
use crate::state::Route;
use crate::state::form::{FunctionField, FunctionForm};
use crate::state::list::{DELETE_CONFIRMATION_MESSAGE, ListView};
use crate::store::{FunctionStore, LOAD_ERROR_MESSAGE};

const PARAMETER_SPEC_FORMAT: &str = "expected name:type:description[:enum,values][:required]";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("API client error: {0}")]
    Api(#[from] ApiError),
    #[error("I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid parameter spec `{spec}`: {reason}")]
    InvalidParameter { spec: String, reason: &'static str },
    #[error("no parameter at index {0}")]
    ParameterIndex(usize),
    #[error("function {0} not found")]
    NotFound(String),
    #[error("validation failed")]
    Validation,
    #[error("{}", LOAD_ERROR_MESSAGE)]
    ListUnavailable,
}

#[derive(Parser, Debug)]
#[command(name = "function-console", about = "Manage function definitions served by the functions API")]
pub struct Cli {
    /// Base URL of the functions API.
    #[arg(long, global = true, env = "API_SERVER")]
    pub api_server: Option<String>,

    /// Creator label stamped on new functions.
    #[arg(long, global = true, env = "FUNCTION_CONSOLE_CREATED_BY")]
    pub created_by: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the function table.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one function with its parameters.
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    Create(CreateArgs),
    Edit(EditArgs),
    Enable {
        id: String,
    },
    Disable {
        id: String,
    },
    /// Delete a function after confirmation.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Name or ARN of the callable target.
    #[arg(long, default_value = "")]
    pub lambda_function: String,

    /// Create the function disabled.
    #[arg(long)]
    pub disabled: bool,

    #[arg(long = "param", value_name = "SPEC", help = "name:type:description[:enum,values][:required]")]
    pub params: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub lambda_function: Option<String>,

    #[arg(long)]
    pub enabled: Option<bool>,

    #[arg(long = "add-param", value_name = "SPEC")]
    pub add_params: Vec<String>,

    /// Remove the parameter at this position (applied before additions).
    #[arg(long = "remove-param", value_name = "INDEX")]
    pub remove_params: Vec<usize>,
}

/// Resolve config from `.env`, the environment, then command-line overrides.
///
/// # Errors
///
/// Returns an error if any configured value is invalid.
pub fn load_config(cli: &Cli) -> Result<ConsoleConfig, CliError> {
    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            warn!(%error, "ignoring unreadable .env file");
        }
    }

    let mut config = ConsoleConfig::from_env()?;
    if let Some(url) = &cli.api_server {
        config = config.with_api_server(url)?;
    }
    if let Some(created_by) = &cli.created_by {
        config = config.with_created_by(created_by.clone());
    }
    Ok(config)
}

/// Run one subcommand against the store.
///
/// # Errors
///
/// Returns an error for invalid input, failed validation, a missing record,
/// an unavailable list, or a failed write to `out`.
pub async fn execute<W: Write>(
    command: Command,
    store: &mut FunctionStore,
    out: &mut W,
    confirm: &mut dyn FnMut(&str) -> io::Result<bool>,
) -> Result<(), CliError> {
    match command {
        Command::List { json } => show_list(store, out, json).await,
        Command::Show { id, json } => show_one(store, out, &id, json).await,
        Command::Create(args) => create(store, out, args).await,
        Command::Edit(args) => edit(store, out, args).await,
        Command::Enable { id } => set_enabled(store, out, &id, true).await,
        Command::Disable { id } => set_enabled(store, out, &id, false).await,
        Command::Delete { id, yes } => delete(store, out, &id, yes, confirm).await,
    }
}

async fn show_list<W: Write>(store: &mut FunctionStore, out: &mut W, json: bool) -> Result<(), CliError> {
    store.load_initial().await;
    if store.error().is_some() {
        return Err(CliError::ListUnavailable);
    }
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(store.records())?)?;
    } else {
        let rows = ListView::rows(store.records());
        out.write_all(render_table(&rows, &ListView::default()).as_bytes())?;
    }
    Ok(())
}

async fn show_one<W: Write>(store: &mut FunctionStore, out: &mut W, id: &str, json: bool) -> Result<(), CliError> {
    let record = store
        .get(id)
        .await
        .ok_or_else(|| CliError::NotFound(id.to_owned()))?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
    } else {
        out.write_all(render_record(&record).as_bytes())?;
    }
    Ok(())
}

async fn create<W: Write>(store: &mut FunctionStore, out: &mut W, args: CreateArgs) -> Result<(), CliError> {
    let mut form = FunctionForm::for_route(&ListView::default().create());
    form.set_field(FunctionField::Name, args.name);
    form.set_field(FunctionField::Description, args.description);
    form.set_field(FunctionField::LambdaFunction, args.lambda_function);
    form.set_enabled(!args.disabled);
    for spec in &args.params {
        form.push_parameter(parse_parameter_spec(spec)?);
    }
    submit_form(store, out, form).await
}

async fn edit<W: Write>(store: &mut FunctionStore, out: &mut W, args: EditArgs) -> Result<(), CliError> {
    let mut view = ListView::default();
    view.toggle_menu(&args.id);
    let mut form = FunctionForm::for_route(&view.edit(&args.id));
    if !form.load(store).await {
        return Err(CliError::NotFound(args.id));
    }

    if let Some(name) = args.name {
        form.set_field(FunctionField::Name, name);
    }
    if let Some(description) = args.description {
        form.set_field(FunctionField::Description, description);
    }
    if let Some(lambda_function) = args.lambda_function {
        form.set_field(FunctionField::LambdaFunction, lambda_function);
    }
    if let Some(enabled) = args.enabled {
        form.set_enabled(enabled);
    }

    let mut removals = args.remove_params;
    removals.sort_unstable();
    removals.dedup();
    for index in removals.into_iter().rev() {
        if form.remove_parameter(index).is_none() {
            return Err(CliError::ParameterIndex(index));
        }
    }
    for spec in &args.add_params {
        form.push_parameter(parse_parameter_spec(spec)?);
    }

    submit_form(store, out, form).await
}

async fn submit_form<W: Write>(store: &mut FunctionStore, out: &mut W, mut form: FunctionForm) -> Result<(), CliError> {
    match form.submit(store).await {
        None => {
            writeln!(out, "{}: validation failed", form.title())?;
            out.write_all(render_form_errors(&form).as_bytes())?;
            Err(CliError::Validation)
        }
        Some(Route::List) => show_list(store, out, false).await,
        Some(route) => {
            debug!(?route, "submit returned a non-list route");
            Ok(())
        }
    }
}

async fn set_enabled<W: Write>(
    store: &mut FunctionStore,
    out: &mut W,
    id: &str,
    enabled: bool,
) -> Result<(), CliError> {
    store.set_enabled(id, enabled).await;
    show_list(store, out, false).await
}

async fn delete<W: Write>(
    store: &mut FunctionStore,
    out: &mut W,
    id: &str,
    yes: bool,
    confirm: &mut dyn FnMut(&str) -> io::Result<bool>,
) -> Result<(), CliError> {
    let mut view = ListView::default();
    view.toggle_menu(id);
    view.request_delete(id);

    if !yes && !confirm(DELETE_CONFIRMATION_MESSAGE)? {
        view.cancel_delete();
        writeln!(out, "Delete cancelled.")?;
        return Ok(());
    }

    view.confirm_delete(store).await;
    show_list(store, out, false).await
}

/// Parse `name:type:description[:enum,values][:required]`.
///
/// Empty name/type/description are accepted here and reported by form
/// validation like any other missing field.
///
/// # Errors
///
/// Returns [`CliError::InvalidParameter`] when the field count is wrong.
pub fn parse_parameter_spec(spec: &str) -> Result<Parameter, CliError> {
    let invalid = |reason| CliError::InvalidParameter { spec: spec.to_owned(), reason };
    let fields: Vec<&str> = spec.split(':').map(str::trim).collect();
    let [name, kind, description, rest @ ..] = fields.as_slice() else {
        return Err(invalid(PARAMETER_SPEC_FORMAT));
    };

    let (required, enum_field) = match rest {
        [] => (false, None),
        ["required"] => (true, None),
        ["optional"] => (false, None),
        [values] => (false, Some(*values)),
        [values, "required"] => (true, Some(*values)),
        [values, "optional"] => (false, Some(*values)),
        [_, _] => return Err(invalid("last field must be `required` or `optional`")),
        _ => return Err(invalid(PARAMETER_SPEC_FORMAT)),
    };

    Ok(Parameter {
        name: (*name).to_owned(),
        kind: (*kind).to_owned(),
        description: (*description).to_owned(),
        enum_values: enum_field.map(Parameter::parse_enum_list).unwrap_or_default(),
        required,
        ..Parameter::default()
    })
}

/// `y`/`yes` in any case; everything else declines.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
