use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use function_console::api::HttpFunctionsApi;
use function_console::cli::{Cli, CliError, execute, is_affirmative, load_config};
use function_console::store::FunctionStore;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let api = HttpFunctionsApi::with_timeouts(&config.api_server, config.timeouts)?;
    let mut store = FunctionStore::new(Arc::new(api), config.record_defaults);

    let mut stdout = io::stdout().lock();
    execute(cli.command, &mut store, &mut stdout, &mut prompt).await
}

fn prompt(message: &str) -> io::Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{message} [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}
