//! Deep link generation from contact form fields.
//!
//! ## Overview
//!
//! Every supported form field has one row in [`FIELD_RULES`]: a validator, a
//! normalizer and a URI builder. [`build_links`] runs each row over the
//! submitted values in table order and keeps whatever produces a link.
//! Values that are blank or cannot be normalized are skipped without error,
//! since partially filled forms are the common case.
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use linkcard_service::links::{LinkContext, build_links};
//!
//! let fields = BTreeMap::from([("twitter".to_string(), "@jdoe".to_string())]);
//! let links = build_links(&fields, &LinkContext::default());
//! assert_eq!(links[0].uri, "https://twitter.com/jdoe");
//! ```

mod builder;
mod normalize;
mod rule;
mod table;

pub use builder::build_links;
pub use rule::{FieldRule, LinkContext, Normalized, OutputLink};
pub use table::FIELD_RULES;
