// Declarative layouts for every supported file kind
pub mod level1;
pub mod level2;
pub mod registry;
pub mod schema;
pub mod system;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export commonly used types
pub use registry::{list_formats, schema_for_magic, schemas_for_kind, FormatInfo};
pub use schema::{Codec, Count, Gate, Item, Limit, Scalar, Schema};
