//! Timeline entity models and their exchange records.
//!
//! # Responsibility
//! - Define the plain exchange records (`record`) and one live model per
//!   entity kind.
//! - Own the aggregate (`timeline`) that holds every live entity by GUID.
//!
//! # Invariants
//! - Every live entity fires its attribute notification exactly once per
//!   `set_attrs`, and only on real change from an individual setter.
//! - `snapshot()` never aliases internal state.
//! - Setters take `&self` and release every attribute borrow before firing,
//!   so a listener may read or write the entity it observes.
//!
//! # See also
//! - `crate::sync` for `replace` and `merge`.

mod attr;
pub mod event;
pub mod fragment;
pub mod group;
pub mod record;
pub mod root;
pub mod row;
pub mod timeline;
pub mod timeseries;
