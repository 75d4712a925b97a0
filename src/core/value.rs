// Decoded values stored in headers and sample columns

use crate::codecs::{Angle, FlagWord, RainFlag, ScanMode};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Row-major 2-D block of floats
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f32>,
}

impl Matrix {
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[f32]> {
        if row >= self.rows {
            return None;
        }
        self.data.get(row * self.cols..(row + 1) * self.cols)
    }
}

/// One decoded field.
///
/// `Missing` marks a field whose block was switched off for the whole file
/// (for example GPS coordinates in a housekeeping file without a receiver).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Missing,
    U8(u8),
    I8(i8),
    U32(u32),
    I32(i32),
    F32(f32),
    /// Decimal degrees
    Coordinate(f64),
    Angle(Angle),
    Rain(RainFlag),
    Scan(ScanMode),
    Flags(FlagWord),
    Time(DateTime<Utc>),
    F32s(Vec<f32>),
    I32s(Vec<i32>),
    Angles(Vec<Angle>),
    Matrix(Matrix),
    List(Vec<Value>),
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Any integer scalar widened to i64
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::U8(v) => Some(i64::from(*v)),
            Value::I8(v) => Some(i64::from(*v)),
            Value::U32(v) => Some(i64::from(*v)),
            Value::I32(v) => Some(i64::from(*v)),
            _ => None,
        }
    }

    /// Any numeric scalar widened to f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F32(v) => Some(f64::from(*v)),
            Value::Coordinate(v) => Some(*v),
            other => other.as_i64().map(|v| v as f64),
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::F32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f32s(&self) -> Option<&[f32]> {
        match self {
            Value::F32s(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i32s(&self) -> Option<&[i32]> {
        match self {
            Value::I32s(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_angle(&self) -> Option<Angle> {
        match self {
            Value::Angle(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_angles(&self) -> Option<&[Angle]> {
        match self {
            Value::Angles(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_rain_flag(&self) -> Option<RainFlag> {
        match self {
            Value::Rain(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_scan_mode(&self) -> Option<ScanMode> {
        match self {
            Value::Scan(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_flags(&self) -> Option<&FlagWord> {
        match self {
            Value::Flags(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Time(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Value::Matrix(v) => Some(v),
            _ => None,
        }
    }

    /// Number of elements for array values, 1 for scalars, 0 when missing
    pub fn len(&self) -> usize {
        match self {
            Value::Missing => 0,
            Value::F32s(v) => v.len(),
            Value::I32s(v) => v.len(),
            Value::Angles(v) => v.len(),
            Value::Matrix(m) => m.data.len(),
            Value::List(v) => v.len(),
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
