//! Period validation and index building over the document store

mod builder;
mod validate;

pub use builder::{build_index, publish_index};
pub use validate::{day_has_data, week_has_data, MIN_DOC_BYTES};
