//! Sample command implementation.

use super::pipeline_for;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use fnol_pipeline::SAMPLE_FNOL;

/// Execute the sample command.
pub fn execute_sample(config: &Config, formatter: &Formatter) -> Result<()> {
    let outcome = pipeline_for(config).process(SAMPLE_FNOL);
    println!("{}", formatter.format_outcome(&outcome)?);
    Ok(())
}
