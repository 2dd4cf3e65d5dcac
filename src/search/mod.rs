//! Property search: caller options and the statement they render to.

pub mod builder;
pub mod options;

pub use builder::{Predicate, SearchQuery};
pub use options::PropertySearch;
