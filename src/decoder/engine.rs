// Schema-driven decoder
//
// Reads the magic code, looks up the registered layout and walks its header
// and sample tables against a forward-only cursor.

use super::error::{DecodeError, Result};
use super::options::DecodeOptions;
use crate::bitwise::{BitWidth, ByteCursor};
use crate::codecs::{angle, epoch, flags, lonlat, rainflag};
use crate::core::{
    Column, Dataset, FileHeader, FileKind, Matrix, RetrievalMethod, SelectorBitmask,
    TimeReference, Value,
};
use crate::formats::registry;
use crate::formats::schema::{
    value_names, Codec, Count, Gate, Item, Limit, Scalar, Schema, RETRIEVAL, TIME_REF,
};
use tracing::{debug, warn};

/// Decode a file image, identifying the kind from its magic code
pub fn decode(data: &[u8]) -> Result<Dataset> {
    decode_with(data, &DecodeOptions::default())
}

/// Decode a file image that must be of `kind`
pub fn decode_as(data: &[u8], kind: FileKind) -> Result<Dataset> {
    decode_with(data, &DecodeOptions::new(kind))
}

pub fn decode_with(data: &[u8], options: &DecodeOptions) -> Result<Dataset> {
    let mut cursor = ByteCursor::new(data);
    let magic = cursor.read_u32_le()?;
    let schema = resolve_schema(magic, options.expected_kind)?;
    debug!(
        "Decoding {} file, magic {} ({} bytes)",
        schema.kind,
        magic,
        data.len()
    );
    Decoder::new(cursor, magic, schema, options).run()
}

fn resolve_schema(magic: u32, expected: Option<FileKind>) -> Result<&'static Schema> {
    let unknown = || DecodeError::UnknownMagic {
        magic,
        expected,
        offset: 0,
    };
    let schema = registry::schema_for_magic(magic).ok_or_else(unknown)?;
    match expected {
        Some(kind) if kind != schema.kind => Err(unknown()),
        _ => Ok(schema),
    }
}

/// Named values of one header or sample, in file order
type Record = Vec<(&'static str, Value)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Header,
    Sample,
}

/// A scalar as read, before any codec is applied
#[derive(Debug, Clone, Copy)]
enum Raw {
    U8(u8),
    I8(i8),
    U32(u32),
    I32(i32),
    F32(f32),
}

impl Raw {
    fn as_i64(self) -> i64 {
        match self {
            Raw::U8(v) => i64::from(v),
            Raw::I8(v) => i64::from(v),
            Raw::U32(v) => i64::from(v),
            Raw::I32(v) => i64::from(v),
            Raw::F32(v) => v as i64,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Raw::F32(v) => f64::from(v),
            other => other.as_i64() as f64,
        }
    }

    fn into_value(self) -> Value {
        match self {
            Raw::U8(v) => Value::U8(v),
            Raw::I8(v) => Value::I8(v),
            Raw::U32(v) => Value::U32(v),
            Raw::I32(v) => Value::I32(v),
            Raw::F32(v) => Value::F32(v),
        }
    }
}

fn apply(codec: Codec, raw: Raw) -> Value {
    match codec {
        Codec::Raw => raw.into_value(),
        Codec::Angle => Value::Angle(angle::decode(raw.as_f64())),
        Codec::Coordinate => Value::Coordinate(lonlat::decode(raw.as_f64())),
        Codec::RainFlag => Value::Rain(rainflag::decode(raw.as_i64() as u8)),
        Codec::ScanMode => Value::Scan(rainflag::decode_scan_mode(raw.as_i64() as u8)),
        Codec::Time => Value::Time(epoch::decode(raw.as_i64())),
        Codec::Quality => Value::Flags(flags::decode_quality(raw.as_i64() as u32)),
        Codec::Status => Value::Flags(flags::decode_status(raw.as_i64() as u32)),
    }
}

/// Collapse an element list into the most specific array value
fn pack(scalar: Scalar, codec: Codec, elements: Vec<Raw>) -> Value {
    match (scalar, codec) {
        (Scalar::F32, Codec::Raw) => {
            Value::F32s(elements.into_iter().map(|r| r.as_f64() as f32).collect())
        }
        (Scalar::I32, Codec::Raw) => {
            Value::I32s(elements.into_iter().map(|r| r.as_i64() as i32).collect())
        }
        (_, Codec::Angle) => Value::Angles(
            elements
                .into_iter()
                .map(|r| angle::decode(r.as_f64()))
                .collect(),
        ),
        _ => Value::List(elements.into_iter().map(|r| apply(codec, r)).collect()),
    }
}

struct Decoder<'a, 'o> {
    cursor: ByteCursor<'a>,
    magic: u32,
    schema: &'static Schema,
    options: &'o DecodeOptions,
    header: Record,
    header_counts: Vec<(&'static str, usize)>,
    sample_counts: Vec<(&'static str, usize)>,
    selector: Option<SelectorBitmask>,
}

impl<'a, 'o> Decoder<'a, 'o> {
    fn new(
        cursor: ByteCursor<'a>,
        magic: u32,
        schema: &'static Schema,
        options: &'o DecodeOptions,
    ) -> Self {
        Self {
            cursor,
            magic,
            schema,
            options,
            header: Vec::new(),
            header_counts: Vec::new(),
            sample_counts: Vec::new(),
            selector: None,
        }
    }

    fn run(mut self) -> Result<Dataset> {
        let mut header = Vec::with_capacity(self.schema.header.len());
        self.read_items(self.schema.header, Scope::Header, &mut header)?;
        self.header = header;

        let n = self.count(self.schema.sample_count);
        debug!(
            "{} header: {} samples, {} fields, data starts at offset {}",
            self.schema.kind,
            n,
            self.header.len(),
            self.cursor.offset()
        );

        // every sample is at least one byte long
        let capacity = n.min(self.cursor.remaining());
        let mut columns: Vec<Column> = self
            .schema
            .column_names()
            .into_iter()
            .map(|name| Column::new(name, capacity))
            .collect();

        let mut record = Vec::with_capacity(columns.len());
        for _ in 0..n {
            self.sample_counts.clear();
            self.read_items(self.schema.sample, Scope::Sample, &mut record)?;
            for (column, (_, value)) in columns.iter_mut().zip(record.drain(..)) {
                column.values.push(value);
            }
        }

        if !self.cursor.is_exhausted() {
            debug!(
                "{} trailing bytes after {} samples ignored",
                self.cursor.remaining(),
                n
            );
        }

        let times = columns
            .iter()
            .find(|c| c.name == self.schema.time_field)
            .map(|c| c.values.iter().filter_map(Value::as_time).collect())
            .unwrap_or_default();

        let offset = self.cursor.offset();
        let header = self.build_header(n);
        Dataset::assemble(header, times, columns).map_err(|mismatch| DecodeError::InvalidCount {
            field: mismatch.column,
            value: mismatch.len as i64,
            offset,
        })
    }

    fn build_header(self, n: usize) -> FileHeader {
        let kind = self.schema.kind;
        let code = |name: &str| {
            self.header
                .iter()
                .find(|(field, _)| *field == name)
                .and_then(|(_, value)| value.as_i64())
        };

        let time_reference = code(TIME_REF).and_then(|c| {
            let reference = TimeReference::from_code(c);
            if reference.is_none() {
                warn!("{} file has unknown time reference code {}", kind, c);
            }
            reference
        });
        let retrieval = code(RETRIEVAL).and_then(|c| {
            let method = RetrievalMethod::from_code(c);
            if method.is_none() {
                warn!("{} file has unknown retrieval method code {}", kind, c);
            }
            method
        });

        FileHeader {
            kind,
            magic: self.magic,
            sample_count: n,
            time_reference,
            retrieval,
            selector: self.selector,
            axis_name: self.schema.axis,
            fields: self.header,
        }
    }

    fn read_items(&mut self, items: &'static [Item], scope: Scope, out: &mut Record) -> Result<()> {
        for item in items {
            match *item {
                Item::Field {
                    name,
                    scalar,
                    codec,
                } => {
                    let raw = self.read_raw(scalar)?;
                    out.push((name, apply(codec, raw)));
                }
                Item::Count {
                    name,
                    scalar,
                    limit,
                } => {
                    let offset = self.cursor.offset();
                    let raw = self.read_raw(scalar)?;
                    let value = raw.as_i64();
                    let max = self.limit(limit);
                    if value < 0 || value as u64 > max as u64 {
                        return Err(DecodeError::InvalidCount {
                            field: name,
                            value,
                            offset,
                        });
                    }
                    match scope {
                        Scope::Header => self.header_counts.push((name, value as usize)),
                        Scope::Sample => self.sample_counts.push((name, value as usize)),
                    }
                    out.push((name, raw.into_value()));
                }
                Item::Array {
                    name,
                    scalar,
                    codec,
                    len,
                } => {
                    let len = self.resolve(len);
                    let elements = self.read_elements(scalar, len)?;
                    out.push((name, pack(scalar, codec, elements)));
                }
                Item::Matrix { name, rows, cols } => {
                    let (rows, cols) = (self.resolve(rows), self.resolve(cols));
                    let elements = self.read_elements(Scalar::F32, rows * cols)?;
                    let data = elements.into_iter().map(|r| r.as_f64() as f32).collect();
                    out.push((name, Value::Matrix(Matrix { rows, cols, data })));
                }
                Item::Padding(len) => {
                    self.cursor.read_bytes(len)?;
                }
                Item::Selector { name } => {
                    let raw = self.cursor.read_bitfield(BitWidth::W8)? as u8;
                    self.cursor.read_bytes(3)?;
                    self.selector = Some(SelectorBitmask::new(raw));
                    out.push((name, Value::U8(raw)));
                }
                Item::Gated { gate, items } => {
                    if self.gate_open(gate, out) {
                        self.read_items(items, scope, out)?;
                    } else {
                        out.extend(value_names(items).into_iter().map(|n| (n, Value::Missing)));
                    }
                }
            }
        }
        Ok(())
    }

    fn read_raw(&mut self, scalar: Scalar) -> Result<Raw> {
        let raw = match scalar {
            Scalar::U8 => Raw::U8(self.cursor.read_u8()?),
            Scalar::I8 => Raw::I8(self.cursor.read_i8()?),
            Scalar::U32 => Raw::U32(self.cursor.read_u32_le()?),
            Scalar::I32 => Raw::I32(self.cursor.read_i32_le()?),
            Scalar::F32 => Raw::F32(self.cursor.read_f32_le()?),
        };
        Ok(raw)
    }

    /// The single element loop behind every array and matrix
    fn read_elements(&mut self, scalar: Scalar, len: usize) -> Result<Vec<Raw>> {
        let mut elements = Vec::with_capacity(len.min(self.cursor.remaining() / scalar.size()));
        for _ in 0..len {
            elements.push(self.read_raw(scalar)?);
        }
        Ok(elements)
    }

    fn gate_open(&self, gate: Gate, record: &Record) -> bool {
        match gate {
            Gate::Selector(flag) => self.selector.is_some_and(|s| s.flag(flag)),
            Gate::NonZero(field) => record
                .iter()
                .chain(&self.header)
                .find(|(name, _)| *name == field)
                .and_then(|(_, value)| value.as_i64())
                .is_some_and(|v| v != 0),
        }
    }

    fn limit(&self, limit: Limit) -> usize {
        match limit {
            Limit::Samples => self.options.max_sample_count,
            Limit::Axis => self.options.max_axis_len,
            Limit::Max(max) => max,
        }
    }

    /// Value of a count read earlier; sample-scoped counts shadow header ones
    fn count(&self, name: &str) -> usize {
        let found = self
            .sample_counts
            .iter()
            .chain(&self.header_counts)
            .find(|(field, _)| *field == name)
            .map(|(_, value)| *value);
        debug_assert!(found.is_some(), "count '{}' not read", name);
        found.unwrap_or_default()
    }

    fn resolve(&self, count: Count) -> usize {
        match count {
            Count::Fixed(len) => len,
            Count::Field(field) => self.count(field),
            Count::FieldPlus(field, extra) => self.count(field) + extra,
            Count::Sum(a, b) => self.count(a) + self.count(b),
        }
    }
}
