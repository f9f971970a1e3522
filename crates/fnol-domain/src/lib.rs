//! FNOL Domain Layer
//!
//! Value types and component boundaries for First-Notice-of-Loss triage.
//! Everything here is plain data: no pattern matching, no policy, no I/O.
//!
//! ## Key Concepts
//!
//! - **FieldRecord**: the structured fields pulled out of one FNOL document
//! - **ClaimType**: keyword-derived category of the loss (always populated)
//! - **MandatoryField**: the fixed, ordered set of fields a claim must carry
//! - **RoutingDecision**: the processing queue chosen for a claim, with reasoning
//! - **ProcessedClaim**: the complete per-document result handed back to callers
//!
//! ## Architecture
//!
//! ```text
//! text → FieldExtractor → FieldRecord → FieldValidator → missing fields
//!                                   ↘                  ↙
//!                                     ClaimRouter → RoutingDecision
//! ```
//!
//! The three stages are defined as traits in [`traits`]; implementations live in
//! the `fnol-extractor`, `fnol-gatekeeper` and `fnol-router` crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod amount;
pub mod claim_type;
pub mod mandatory;
pub mod outcome;
pub mod record;
pub mod route;
pub mod traits;

// Re-exports for convenience
pub use amount::format_amount;
pub use claim_type::ClaimType;
pub use mandatory::MandatoryField;
pub use outcome::ProcessedClaim;
pub use record::{FieldRecord, ASSET_TYPE_FALLBACK};
pub use route::{RouteLabel, RoutingDecision, REASON_SEPARATOR};
pub use rust_decimal::Decimal;
