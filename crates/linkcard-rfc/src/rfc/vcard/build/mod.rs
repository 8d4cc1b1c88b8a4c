//! vCard serialization.

mod serializer;

pub use serializer::{render_contact, serialize_single};
