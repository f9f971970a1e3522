//! FNOL Gatekeeper
//!
//! Completeness check for extracted claims.
//!
//! The Gatekeeper compares a [`FieldRecord`](fnol_domain::FieldRecord) against
//! the fixed mandatory-field list and reports every field that is absent or
//! empty. It never rejects or errors: an incomplete record is a normal outcome
//! that the router sends to manual review.
//!
//! # Examples
//!
//! ```
//! use fnol_domain::traits::FieldValidator;
//! use fnol_domain::{FieldRecord, MandatoryField};
//! use fnol_gatekeeper::Gatekeeper;
//!
//! let missing = Gatekeeper::new().validate(&FieldRecord::default());
//!
//! // Asset type and claim type are always populated
//! assert_eq!(missing.len(), 8);
//! assert_eq!(missing[0], MandatoryField::PolicyNumber);
//! ```

#![warn(missing_docs)]

mod validator;

pub use validator::{is_missing, Gatekeeper};
