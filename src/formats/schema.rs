// Declarative record layouts
//
// A schema lists the header items and the per-sample items of one file kind
// in the order they appear on disk. The decoder walks these tables; nothing
// format-specific lives in the engine.

use crate::core::FileKind;

/// On-disk scalar type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    U8,
    I8,
    U32,
    I32,
    F32,
}

impl Scalar {
    pub const fn size(self) -> usize {
        match self {
            Scalar::U8 | Scalar::I8 => 1,
            Scalar::U32 | Scalar::I32 | Scalar::F32 => 4,
        }
    }
}

/// Interpretation applied to a scalar after it is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Raw,
    Angle,
    Coordinate,
    RainFlag,
    ScanMode,
    Time,
    Quality,
    Status,
}

/// Upper bound checked when a count field is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// `DecodeOptions::max_sample_count`
    Samples,
    /// `DecodeOptions::max_axis_len`
    Axis,
    Max(usize),
}

/// Length of an array or matrix dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    Fixed(usize),
    /// Value of an earlier count field
    Field(&'static str),
    /// Count field plus a constant
    FieldPlus(&'static str, usize),
    /// Sum of two count fields
    Sum(&'static str, &'static str),
}

impl Count {
    /// Count fields this length depends on
    pub fn fields(&self) -> Vec<&'static str> {
        match *self {
            Count::Fixed(_) => vec![],
            Count::Field(f) | Count::FieldPlus(f, _) => vec![f],
            Count::Sum(a, b) => vec![a, b],
        }
    }
}

/// Condition for a gated group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Flag `k` of the header selector, MSB first
    Selector(usize),
    /// Named header field is not zero
    NonZero(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    Field {
        name: &'static str,
        scalar: Scalar,
        codec: Codec,
    },
    Count {
        name: &'static str,
        scalar: Scalar,
        limit: Limit,
    },
    Array {
        name: &'static str,
        scalar: Scalar,
        codec: Codec,
        len: Count,
    },
    /// Row-major f32 block
    Matrix {
        name: &'static str,
        rows: Count,
        cols: Count,
    },
    Padding(usize),
    /// One selector byte followed by three padding bytes
    Selector { name: &'static str },
    Gated {
        gate: Gate,
        items: &'static [Item],
    },
}

impl Item {
    pub const fn coded(name: &'static str, scalar: Scalar, codec: Codec) -> Item {
        Item::Field {
            name,
            scalar,
            codec,
        }
    }

    pub const fn float(name: &'static str) -> Item {
        Item::coded(name, Scalar::F32, Codec::Raw)
    }

    pub const fn int(name: &'static str) -> Item {
        Item::coded(name, Scalar::I32, Codec::Raw)
    }

    pub const fn uint(name: &'static str) -> Item {
        Item::coded(name, Scalar::U32, Codec::Raw)
    }

    pub const fn byte(name: &'static str) -> Item {
        Item::coded(name, Scalar::U8, Codec::Raw)
    }

    pub const fn time(name: &'static str, scalar: Scalar) -> Item {
        Item::coded(name, scalar, Codec::Time)
    }

    pub const fn rain_flag(name: &'static str) -> Item {
        Item::coded(name, Scalar::U8, Codec::RainFlag)
    }

    pub const fn angle(name: &'static str) -> Item {
        Item::coded(name, Scalar::F32, Codec::Angle)
    }

    pub const fn count(name: &'static str, scalar: Scalar, limit: Limit) -> Item {
        Item::Count {
            name,
            scalar,
            limit,
        }
    }

    pub const fn floats(name: &'static str, len: Count) -> Item {
        Item::Array {
            name,
            scalar: Scalar::F32,
            codec: Codec::Raw,
            len,
        }
    }

    pub const fn ints(name: &'static str, len: Count) -> Item {
        Item::Array {
            name,
            scalar: Scalar::I32,
            codec: Codec::Raw,
            len,
        }
    }

    pub const fn angles(name: &'static str, len: Count) -> Item {
        Item::Array {
            name,
            scalar: Scalar::F32,
            codec: Codec::Angle,
            len,
        }
    }

    pub const fn matrix(name: &'static str, rows: Count, cols: Count) -> Item {
        Item::Matrix { name, rows, cols }
    }

    pub const fn gated(gate: Gate, items: &'static [Item]) -> Item {
        Item::Gated { gate, items }
    }

    /// Name of the value this item produces, `None` for padding and groups
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            Item::Field { name, .. }
            | Item::Count { name, .. }
            | Item::Array { name, .. }
            | Item::Matrix { name, .. }
            | Item::Selector { name } => Some(name),
            Item::Padding(_) | Item::Gated { .. } => None,
        }
    }
}

/// Names produced by `items`, descending into gated groups
pub fn value_names(items: &[Item]) -> Vec<&'static str> {
    let mut names = Vec::new();
    collect_names(items, &mut names);
    names
}

fn collect_names(items: &[Item], out: &mut Vec<&'static str>) {
    for item in items {
        match item {
            Item::Gated { items, .. } => collect_names(items, out),
            other => out.extend(other.name()),
        }
    }
}

/// Layout of one file kind (or one variant of it)
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub kind: FileKind,
    /// Distinguishes layouts of the same kind, e.g. legacy MET files
    pub variant: Option<&'static str>,
    pub magics: &'static [u32],
    /// Header items after the magic code
    pub header: &'static [Item],
    pub sample: &'static [Item],
    /// Header count field holding the number of samples
    pub sample_count: &'static str,
    /// Per-sample field used as the time axis
    pub time_field: &'static str,
    pub axis: Option<&'static str>,
}

/// Header field carrying the time reference code
pub const TIME_REF: &str = "time_ref";
/// Header field carrying the retrieval method code
pub const RETRIEVAL: &str = "retrieval";

impl Schema {
    pub fn column_names(&self) -> Vec<&'static str> {
        value_names(self.sample)
    }

    pub fn header_names(&self) -> Vec<&'static str> {
        value_names(self.header)
    }

    /// Check that every count, gate and axis reference resolves to a field
    /// declared earlier, and that names are unique within each record.
    pub fn validate(&self) -> Result<(), String> {
        let mut header = Scope::default();
        check_items(self.header, &Scope::default(), &mut header)?;

        let mut sample = Scope::default();
        check_items(self.sample, &header, &mut sample)?;

        if !header.counts.contains(&self.sample_count) {
            return Err(format!("sample count '{}' not declared", self.sample_count));
        }
        if !sample.fields.contains(&self.time_field) {
            return Err(format!("time field '{}' not declared", self.time_field));
        }
        if let Some(axis) = self.axis {
            if !header.fields.contains(&axis) {
                return Err(format!("axis '{}' not declared", axis));
            }
        }
        Ok(())
    }
}

#[derive(Default)]
struct Scope {
    counts: Vec<&'static str>,
    fields: Vec<&'static str>,
}

fn check_items(items: &[Item], outer: &Scope, scope: &mut Scope) -> Result<(), String> {
    for item in items {
        let deps = match item {
            Item::Array { len, .. } => len.fields(),
            Item::Matrix { rows, cols, .. } => {
                let mut d = rows.fields();
                d.extend(cols.fields());
                d
            }
            Item::Gated { gate, items } => {
                match gate {
                    Gate::NonZero(f) if !scope.fields.contains(f) && !outer.fields.contains(f) => {
                        return Err(format!("gate field '{}' not declared", f));
                    }
                    Gate::Selector(k) if *k >= 8 => {
                        return Err(format!("selector flag {} out of range", k));
                    }
                    _ => {}
                }
                check_items(items, outer, scope)?;
                continue;
            }
            _ => vec![],
        };
        for dep in deps {
            if !scope.counts.contains(&dep) && !outer.counts.contains(&dep) {
                return Err(format!("count '{}' used before it is declared", dep));
            }
        }
        if let Item::Count { name, .. } = item {
            scope.counts.push(*name);
        }
        if let Some(name) = item.name() {
            if scope.fields.contains(&name) {
                return Err(format!("duplicate field '{}'", name));
            }
            scope.fields.push(name);
        }
    }
    Ok(())
}
