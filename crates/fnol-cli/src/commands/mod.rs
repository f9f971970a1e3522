//! Command implementations.

mod config;
mod process;
mod sample;

pub use config::execute_config;
pub use process::{execute_process, read_document};
pub use sample::execute_sample;

use crate::config::Config;
use fnol_pipeline::StandardPipeline;

/// Pipeline configured with the routing section of `config`.
fn pipeline_for(config: &Config) -> StandardPipeline {
    StandardPipeline::with_router_config(config.routing.clone())
}
