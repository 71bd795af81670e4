//! Search criteria compiler for the Meridian REST API.
//!
//! Turns a structured criteria object (field name -> scalar, list, or
//! operator set) into the filter string the backend accepts in its `q`
//! query parameter, e.g. `CODE like 'AB*' and PRICE gte 100 and PRICE lte
//! 500 and (STATUS eq 1 or STATUS eq 2 or STATUS eq 3)`.
//!
//! Criteria that produce no clause compile to `None`; callers must then
//! omit the `q` parameter instead of sending an empty filter.

mod builder;
mod fields;
mod typed;
mod types;

pub use builder::{build_search_query, Criteria};
pub use fields::{SearchField, SortDir, SortKey};
pub use typed::{DateFieldValue, NumberFieldValue, StringFieldValue};
pub use types::{FieldValue, Ops, Scalar};

#[cfg(test)]
mod tests;
