//! Snapshot reconciliation for the timeline aggregate.
//!
//! # Responsibility
//! - `replace`: make the live aggregate equal an incoming snapshot.
//! - `merge`: fold an incoming payload in without removing anything.
//! - Define the pluggable policy used by `merge` for GUID collisions.
//!
//! # Invariants
//! - Entities present before and after a call keep their identity and their
//!   notification listeners.
//! - Neither call is atomic; a parse failure part-way leaves the aggregate
//!   partially reconciled and is returned to the caller.
//! - Listeners fired during a call observe intermediate state.

pub mod apply;
pub mod merge;
pub mod replace;
pub mod strategy;
