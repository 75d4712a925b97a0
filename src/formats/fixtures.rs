// Test helpers: little-endian file builder and schema-driven synthesis

use super::schema::{Codec, Count, Item, Limit, Scalar, Schema};
use std::collections::HashMap;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a test subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_test_writer())
        .try_init();
}

/// Appends little-endian fields one at a time
#[derive(Debug, Clone, Default)]
pub struct FileBuilder {
    data: Vec<u8>,
}

impl FileBuilder {
    pub fn new(magic: u32) -> Self {
        Self::default().u32(magic)
    }

    pub fn u8(mut self, v: u8) -> Self {
        self.data.push(v);
        self
    }

    pub fn i8(self, v: i8) -> Self {
        self.u8(v as u8)
    }

    pub fn u32(mut self, v: u32) -> Self {
        self.data.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn i32(mut self, v: i32) -> Self {
        self.data.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn f32(mut self, v: f32) -> Self {
        self.data.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn f32s(self, values: &[f32]) -> Self {
        values.iter().fold(self, |b, v| b.f32(*v))
    }

    pub fn i32s(self, values: &[i32]) -> Self {
        values.iter().fold(self, |b, v| b.i32(*v))
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    pub fn append(mut self, other: FileBuilder) -> Self {
        self.data.extend(other.data);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }
}

/// Build a well-formed file for `schema` holding `n` samples.
///
/// Every axis count is `axis_len` (capped by fixed limits), every selector
/// block is switched on and every integer field is 1, so gated groups are
/// always present.
pub fn synthesize(schema: &Schema, n: usize, axis_len: usize) -> Vec<u8> {
    let mut synth = Synth {
        builder: FileBuilder::new(schema.magics[0]),
        counts: HashMap::new(),
        sample_count: schema.sample_count,
        n,
        axis_len,
    };
    synth.items(schema.header, 0);
    for index in 0..n {
        synth.items(schema.sample, index);
    }
    synth.builder.build()
}

struct Synth {
    builder: FileBuilder,
    counts: HashMap<&'static str, usize>,
    sample_count: &'static str,
    n: usize,
    axis_len: usize,
}

impl Synth {
    fn scalar(&mut self, scalar: Scalar, value: f64) {
        let b = std::mem::take(&mut self.builder);
        self.builder = match scalar {
            Scalar::U8 => b.u8(value as u8),
            Scalar::I8 => b.i8(value as i8),
            Scalar::U32 => b.u32(value as u32),
            Scalar::I32 => b.i32(value as i32),
            Scalar::F32 => b.f32(value as f32),
        };
    }

    fn resolve(&self, count: Count) -> usize {
        match count {
            Count::Fixed(k) => k,
            Count::Field(f) => self.counts[f],
            Count::FieldPlus(f, k) => self.counts[f] + k,
            Count::Sum(a, b) => self.counts[a] + self.counts[b],
        }
    }

    fn items(&mut self, items: &[Item], index: usize) {
        for item in items {
            match *item {
                Item::Field { scalar, codec, .. } => {
                    let value = match (scalar, codec) {
                        (_, Codec::Time) => 600.0 * index as f64,
                        (Scalar::F32, _) => 1.5 + index as f64,
                        (Scalar::U8 | Scalar::I8, _) => 0.0,
                        _ => 1.0,
                    };
                    self.scalar(scalar, value);
                }
                Item::Count {
                    name,
                    scalar,
                    limit,
                } => {
                    let value = if name == self.sample_count {
                        self.n
                    } else if let Limit::Max(max) = limit {
                        self.axis_len.min(max)
                    } else {
                        self.axis_len
                    };
                    self.counts.insert(name, value);
                    self.scalar(scalar, value as f64);
                }
                Item::Array { scalar, len, .. } => {
                    for k in 0..self.resolve(len) {
                        self.scalar(scalar, k as f64);
                    }
                }
                Item::Matrix { rows, cols, .. } => {
                    for k in 0..self.resolve(rows) * self.resolve(cols) {
                        self.scalar(Scalar::F32, k as f64);
                    }
                }
                Item::Padding(len) => {
                    self.builder = std::mem::take(&mut self.builder).bytes(&vec![0; len]);
                }
                Item::Selector { .. } => {
                    self.builder = std::mem::take(&mut self.builder).bytes(&[0xFF, 0, 0, 0]);
                }
                Item::Gated { items, .. } => self.items(items, index),
            }
        }
    }
}
