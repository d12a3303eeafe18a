use ahash::HashMap;
use compact_str::CompactString;

use crate::normalize::NormalizedRecord;

/// Occurrence counts of normalized first and last names across one record
/// set, built in a single pass before any scoring starts.
///
/// A name occurring at least `min_freq` times is considered common, and
/// matches driven by it are discounted by the scorer. The two tables are
/// independent: a string common as a first name is not thereby common as a
/// last name. Never mutated after construction, so it is shared by reference
/// across scoring threads.
pub(crate) struct StopNames {
  min_freq: usize,
  first: HashMap<CompactString, usize>,
  last: HashMap<CompactString, usize>,
}

impl StopNames {
  pub(crate) fn from_records<'r, I>(records: I, min_freq: usize) -> StopNames
  where
    I: Iterator<Item = &'r NormalizedRecord>,
  {
    let mut first: HashMap<CompactString, usize> = HashMap::default();
    let mut last: HashMap<CompactString, usize> = HashMap::default();

    for record in records {
      if !record.first_name.is_empty() {
        *first.entry(CompactString::from(record.first_name.as_str())).or_insert(0) += 1;
      }

      if !record.last_name.is_empty() {
        *last.entry(CompactString::from(record.last_name.as_str())).or_insert(0) += 1;
      }
    }

    StopNames { min_freq, first, last }
  }

  pub(crate) fn common_first(&self, name: &str) -> bool {
    self.first.get(name).is_some_and(|count| count >= &self.min_freq)
  }

  pub(crate) fn common_last(&self, name: &str) -> bool {
    self.last.get(name).is_some_and(|count| count >= &self.min_freq)
  }
}
