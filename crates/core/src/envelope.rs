// crates/core/src/envelope.rs

//! One-line summaries of the dashboard API's `{success, data}` envelope.

use std::fmt;

use serde_json::Value;

/// How many records an envelope's `data` carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordCount {
    List(usize),
    /// `data` is a single object.
    Single,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeSummary {
    pub success: Option<bool>,
    pub records: RecordCount,
    /// `data.pagination.total_records`, for paginated actions.
    pub total_records: Option<u64>,
}

impl EnvelopeSummary {
    /// Summarize any JSON body. Shapes other than the envelope yield empty fields.
    pub fn from_value(body: &Value) -> Self {
        let success = body.get("success").and_then(Value::as_bool);
        let data = body.get("data").filter(|d| !d.is_null());

        let (records, total_records) = match data {
            Some(Value::Array(items)) => (RecordCount::List(items.len()), None),
            Some(obj @ Value::Object(_)) => match obj.get("records") {
                Some(Value::Array(items)) => (
                    RecordCount::List(items.len()),
                    obj.pointer("/pagination/total_records")
                        .and_then(Value::as_u64),
                ),
                _ => (RecordCount::Single, None),
            },
            Some(_) => (RecordCount::Single, None),
            None => (RecordCount::Absent, None),
        };

        Self {
            success,
            records,
            total_records,
        }
    }
}

impl fmt::Display for EnvelopeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.success {
            Some(success) => write!(f, "success={}", success)?,
            None => write!(f, "success=?")?,
        }
        match self.records {
            RecordCount::List(n) => write!(f, ", {} records", n)?,
            RecordCount::Single => write!(f, ", single object")?,
            RecordCount::Absent => {}
        }
        if let Some(total) = self.total_records {
            write!(f, " of {}", total)?;
        }
        Ok(())
    }
}
