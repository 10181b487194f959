use std::{io::Write, process::ExitCode};

use anyhow::Result;

use crate::{project::ProjectName, scaffold::Scaffolder};

pub const USAGE: &str =
    "\nmakes a new octet project in src/examples\n\nusage: make_example.py projectname";

const HELP_FLAG: &str = "--help";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Usage was printed, nothing touched
    Help,
    /// Every argument was scaffolded
    Completed,
    /// Stopped at an argument that is not a project name
    Rejected,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Help | Self::Completed => ExitCode::SUCCESS,
            Self::Rejected => ExitCode::FAILURE,
        }
    }
}

/// Runs one pass over `args` (program name excluded). Usage text and option
/// diagnostics go to `out`; filesystem errors are returned as-is and abort
/// the remaining arguments.
pub fn run<I, S, W>(args: I, scaffolder: &Scaffolder, out: &mut W) -> Result<Outcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let args: Vec<S> = args.into_iter().collect();

    if args.is_empty() || args.iter().any(|a| a.as_ref() == HELP_FLAG) {
        writeln!(out, "{USAGE}")?;
        return Ok(Outcome::Help);
    }

    for arg in &args {
        match arg.as_ref().parse::<ProjectName>() {
            Ok(name) => {
                scaffolder.make_example(&name)?;
            }
            Err(e) => {
                tracing::debug!(arg = arg.as_ref(), "stopping at rejected argument");
                writeln!(out, "{e}")?;
                return Ok(Outcome::Rejected);
            }
        }
    }

    Ok(Outcome::Completed)
}
