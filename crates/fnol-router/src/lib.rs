//! FNOL Router
//!
//! Decides which processing queue a claim goes to.
//!
//! Routing is an ordered list of [`RoutingRule`]s evaluated top to bottom; the
//! first rule that applies produces the [`RoutingDecision`](fnol_domain::RoutingDecision)
//! and evaluation stops:
//!
//! 1. missing mandatory fields → Manual Review
//! 2. fraud keyword anywhere in the document → Investigation
//! 3. injury claim → Specialist Queue
//! 4. damage estimate below the fast-track threshold → Fast-track, otherwise
//!    Standard Processing
//!
//! A claim none of them applies to goes to Manual Review.
//!
//! The threshold and the fraud keywords come from [`RouterConfig`], which can be
//! loaded from TOML.

#![warn(missing_docs)]

pub mod config;
mod policy;
mod router;

pub use config::{ConfigError, RouterConfig, DEFAULT_FAST_TRACK_THRESHOLD, DEFAULT_FRAUD_KEYWORDS};
pub use policy::{RoutingContext, RoutingRule};
pub use router::Router;
