//! Collection primitives shared by entity models and the aggregate.

pub mod ordered_set;
