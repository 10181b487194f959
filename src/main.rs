mod cli;
mod config;
mod project;
mod scaffold;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::ScaffoldConfig;
use crate::scaffold::Scaffolder;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let scaffolder = Scaffolder::new(ScaffoldConfig::default());
    tracing::debug!(
        prototype_dir = %scaffolder.config().prototype_dir.display(),
        target_dir = %scaffolder.config().target_dir.display(),
        "scaffold paths"
    );

    let args = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned());

    let outcome = cli::run(args, &scaffolder, &mut std::io::stdout().lock())?;

    Ok(outcome.exit_code())
}
