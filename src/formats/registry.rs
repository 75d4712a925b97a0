// Format registry: every layout submitted with `register_format!`

use super::schema::Schema;
use crate::core::FileKind;
use std::collections::HashMap;
use tracing::warn;

inventory::collect!(Schema);

/// Summary of a registered layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatInfo {
    pub kind: FileKind,
    pub variant: Option<&'static str>,
    pub magics: &'static [u32],
    pub columns: Vec<&'static str>,
}

impl FormatInfo {
    pub fn full_name(&self) -> String {
        match self.variant {
            Some(variant) => format!("{} ({})", self.kind, variant),
            None => self.kind.to_string(),
        }
    }
}

// Schemas indexed by magic code, built on first use
lazy_static::lazy_static! {
    static ref SCHEMAS_BY_MAGIC: HashMap<u32, &'static Schema> = {
        let mut map = HashMap::new();
        for schema in inventory::iter::<Schema> {
            for magic in schema.magics {
                if let Some(previous) = map.insert(*magic, schema) {
                    warn!(
                        "Magic code {} registered for both {} and {}",
                        magic, previous.kind, schema.kind
                    );
                }
            }
        }
        map
    };
}

/// Layout for a magic code
pub fn schema_for_magic(magic: u32) -> Option<&'static Schema> {
    SCHEMAS_BY_MAGIC.get(&magic).copied()
}

/// All layouts of one kind, ordered by magic code
pub fn schemas_for_kind(kind: FileKind) -> Vec<&'static Schema> {
    let mut schemas: Vec<_> = inventory::iter::<Schema>
        .into_iter()
        .filter(|s| s.kind == kind)
        .collect();
    schemas.sort_by_key(|s| s.magics.first().copied());
    schemas
}

/// List all registered layouts in kind order
pub fn list_formats() -> Vec<FormatInfo> {
    FileKind::ALL
        .into_iter()
        .flat_map(schemas_for_kind)
        .map(|schema| FormatInfo {
            kind: schema.kind,
            variant: schema.variant,
            magics: schema.magics,
            columns: schema.column_names(),
        })
        .collect()
}

/// Helper macro to register a layout
#[macro_export]
macro_rules! register_format {
    ($schema:expr) => {
        inventory::submit! { $schema }
    };
}
