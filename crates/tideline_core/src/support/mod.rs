//! External collaborator services consumed by the timeline model.
//!
//! # Responsibility
//! - Convert exchange-format timestamps and colors to their internal forms.
//! - Provide the value axis owned by row models.
//!
//! # Invariants
//! - Conversions are pure functions; none of them touch model state.

pub mod axis;
pub mod color;
pub mod guid;
pub mod time;
