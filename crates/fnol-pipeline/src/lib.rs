//! FNOL Pipeline
//!
//! One call per document: extract, validate, route.
//!
//! # Example
//!
//! ```
//! use fnol_pipeline::{process_document, SAMPLE_FNOL};
//! use fnol_domain::RouteLabel;
//!
//! let outcome = process_document(SAMPLE_FNOL);
//!
//! assert!(outcome.missing_fields.is_empty());
//! assert_eq!(outcome.extracted_fields.asset_type, "2022 Toyota Camry");
//! assert_eq!(outcome.recommended_route, RouteLabel::SpecialistQueue);
//! ```
//!
//! Callers that need a different routing policy build a [`ClaimsPipeline`]
//! themselves:
//!
//! ```
//! use fnol_pipeline::StandardPipeline;
//! use fnol_router::RouterConfig;
//!
//! let config = RouterConfig::from_toml("fast_track_threshold = 5000").unwrap();
//! let pipeline = StandardPipeline::with_router_config(config);
//! let outcome = pipeline.process("ESTIMATE AMOUNT: $7,000");
//! assert!(!outcome.is_complete());
//! ```

#![warn(missing_docs)]

mod pipeline;
mod sample;

pub use pipeline::{process_document, ClaimsPipeline, StandardPipeline};
pub use sample::SAMPLE_FNOL;
