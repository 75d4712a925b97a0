// Decoded file: header plus time-aligned sample columns

use super::header::FileHeader;
use super::kind::FileKind;
use super::value::Value;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One per-sample field across the whole file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: &'static str,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Samples carrying a missing marker
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }

    /// Scalar float column, `None` where a sample has no float
    pub fn f32_values(&self) -> Vec<Option<f32>> {
        self.values.iter().map(Value::as_f32).collect()
    }
}

/// A fully decoded file.
///
/// Every column and the time axis hold exactly `header.sample_count`
/// entries; a `Dataset` is only built once that holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    header: FileHeader,
    times: Vec<DateTime<Utc>>,
    columns: Vec<Column>,
}

/// Column whose length disagrees with the header sample count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthMismatch {
    pub column: &'static str,
    pub len: usize,
}

impl Dataset {
    /// Assemble a dataset, checking every column against the sample count
    pub fn assemble(
        header: FileHeader,
        times: Vec<DateTime<Utc>>,
        columns: Vec<Column>,
    ) -> Result<Self, LengthMismatch> {
        let n = header.sample_count;
        if times.len() != n {
            return Err(LengthMismatch {
                column: "time",
                len: times.len(),
            });
        }
        if let Some(bad) = columns.iter().find(|c| c.len() != n) {
            return Err(LengthMismatch {
                column: bad.name,
                len: bad.len(),
            });
        }
        Ok(Self {
            header,
            times,
            columns,
        })
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn kind(&self) -> FileKind {
        self.header.kind
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[DateTime<Utc>] {
        &self.times
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    /// Value of column `name` at sample `index`
    pub fn value(&self, name: &str, index: usize) -> Option<&Value> {
        self.column(name)?.values.get(index)
    }

    /// Render as JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecs::epoch;
    use crate::core::kind::CBH_MAGIC;

    fn header(n: usize) -> FileHeader {
        FileHeader {
            kind: FileKind::Cbh,
            magic: CBH_MAGIC,
            sample_count: n,
            time_reference: None,
            retrieval: None,
            selector: None,
            axis_name: None,
            fields: vec![("min", Value::F32(0.0)), ("max", Value::F32(9000.0))],
        }
    }

    fn column(name: &'static str, values: Vec<Value>) -> Column {
        Column { name, values }
    }

    #[test]
    fn test_assemble_checks_lengths() {
        let times = vec![epoch::decode(0), epoch::decode(60)];
        let ok = Dataset::assemble(
            header(2),
            times.clone(),
            vec![column("cbh", vec![Value::F32(800.0), Value::Missing])],
        )
        .unwrap();
        assert_eq!(ok.len(), 2);
        assert_eq!(ok.kind(), FileKind::Cbh);
        assert_eq!(ok.value("cbh", 0), Some(&Value::F32(800.0)));
        assert_eq!(ok.column("cbh").unwrap().missing_count(), 1);
        assert_eq!(
            ok.column("cbh").unwrap().f32_values(),
            vec![Some(800.0), None]
        );
        assert!(ok.column("nope").is_none());

        let err = Dataset::assemble(
            header(2),
            times,
            vec![column("cbh", vec![Value::F32(800.0)])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            LengthMismatch {
                column: "cbh",
                len: 1
            }
        );

        let err = Dataset::assemble(header(3), vec![], vec![]).unwrap_err();
        assert_eq!(err.column, "time");
    }

    #[test]
    fn test_to_json() {
        let ds = Dataset::assemble(
            header(1),
            vec![epoch::decode(0)],
            vec![column("cbh", vec![Value::F32(1200.0)])],
        )
        .unwrap();
        let json = ds.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["header"]["kind"], "Cbh");
        assert_eq!(parsed["times"][0], "2001-01-01T00:00:00Z");
        assert_eq!(parsed["columns"][0]["name"], "cbh");
    }
}
