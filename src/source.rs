use crate::{error::DidarError, model::Record};

/// Where the engine pulls its records from: a database view, a spreadsheet
/// reader, or an in-memory list.
///
/// An unavailable backend must surface as [DidarError::SourceError]; the
/// engine never retries, that policy belongs to the caller.
pub trait RecordSource: Send + Sync {
  fn records(&self, event_id: i64) -> Result<Vec<Record>, DidarError>;
}

/// Record source over an in-memory list, for embedding callers and tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
  records: Vec<Record>,
}

impl MemorySource {
  pub fn with_records(records: Vec<Record>) -> MemorySource {
    MemorySource { records }
  }
}

impl RecordSource for MemorySource {
  fn records(&self, event_id: i64) -> Result<Vec<Record>, DidarError> {
    Ok(self.records.iter().filter(|record| record.event_id == event_id).cloned().collect())
  }
}
