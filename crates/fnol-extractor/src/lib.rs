//! FNOL Extractor
//!
//! Pulls structured fields out of First-Notice-of-Loss text with a fixed battery
//! of case-insensitive pattern rules.
//!
//! # Overview
//!
//! Each text field is produced by one entry of a rule table: a compiled label
//! pattern plus a post-processor that turns the first match into the field value.
//! Fields without a match stay `None`; extraction never fails. Three fields are
//! derived rather than captured:
//!
//! - **Asset type**: year, make and model located independently and composed,
//!   falling back to `"Vehicle"`
//! - **Estimated damage**: the `ESTIMATE AMOUNT` token parsed as a decimal
//! - **Claim type**: first keyword group that occurs anywhere in the text
//!
//! # Architecture
//!
//! ```text
//! Text → [text rules] ─┐
//!      → vehicle ──────┼→ FieldRecord
//!      → amount ───────┤
//!      → classifier ───┘
//! ```
//!
//! # Example Usage
//!
//! ```
//! use fnol_domain::traits::FieldExtractor;
//! use fnol_domain::ClaimType;
//! use fnol_extractor::Extractor;
//!
//! let text = "POLICY NUMBER: AUTO-77\nDESCRIPTION OF ACCIDENT: Car stolen overnight.";
//! let record = Extractor::new().extract(text);
//!
//! assert_eq!(record.policy_number.as_deref(), Some("AUTO-77"));
//! assert_eq!(record.claim_type, ClaimType::Theft);
//! assert_eq!(record.asset_type, "Vehicle");
//! ```

#![warn(missing_docs)]

mod amount;
mod classifier;
mod extractor;
mod rules;
mod vehicle;


pub use amount::parse_amount;
pub use classifier::classify_claim_type;
pub use extractor::Extractor;
pub use rules::{FieldRule, TextField};
