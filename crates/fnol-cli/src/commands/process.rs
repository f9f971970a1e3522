//! Process command implementation.

use super::pipeline_for;
use crate::cli::ProcessArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::fs;
use std::io::Read;

/// Execute the process command.
pub fn execute_process(args: ProcessArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = read_document(&args)?;
    let outcome = pipeline_for(config).process(&text);
    println!("{}", formatter.format_outcome(&outcome)?);
    Ok(())
}

/// Read the document named by `args`, decoding invalid UTF-8 lossily.
pub fn read_document(args: &ProcessArgs) -> Result<String> {
    let bytes = match (&args.file, args.stdin) {
        (_, true) => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
        (Some(path), false) => fs::read(path)?,
        (None, false) => {
            return Err(CliError::InvalidInput(
                "Provide a document path or --stdin".to_string(),
            ))
        }
    };

    tracing::info!(bytes = bytes.len(), "Read document");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
