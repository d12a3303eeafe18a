use std::sync::{
  Arc,
  atomic::AtomicBool,
};

use bon::bon;
use tracing::instrument;

use crate::{
  assemble, candidates,
  error::DidarError,
  frequency::StopNames,
  matching::MatchParams,
  model::{MatchReport, Record},
  normalize::{NormalizedRecord, Normalizer, PersianNormalizer},
  scoring,
  source::RecordSource,
};

/// The main entry point for running a deduplication pass.
///
/// `Didar` compares every pair of guest records attached to an event and
/// reports the pairs that look like the same person, scored field by field.
/// It needs a [RecordSource] to pull records from; text canonicalization can
/// be swapped by providing another [Normalizer].
///
/// # Examples
///
/// ```rust
/// # use didar::prelude::*;
/// let guests = vec![
///   Record::builder(1).first_name("دکتر علی").last_name("احمدی").event_id(7).build(),
///   Record::builder(2).first_name("علی").last_name("احمدی").event_id(7).build(),
/// ];
///
/// let didar = Didar::new(MemorySource::with_records(guests)).build();
/// let report = didar.find_duplicates(7, &MatchParams::default()).unwrap();
///
/// assert_eq!(report.total_pairs, 1);
/// ```
pub struct Didar<S: RecordSource> {
  source: S,
  normalizer: Box<dyn Normalizer>,
  abort: Option<Arc<AtomicBool>>,
}

#[bon]
impl<S: RecordSource> Didar<S> {
  /// Create a new Didar instance over a record source.
  ///
  /// An `abort` flag can be handed in by callers that wrap the run with a
  /// timeout: raising it makes the run fail with [DidarError::Aborted] at the
  /// next partition boundary, never yielding a partial result.
  #[allow(clippy::new_ret_no_self)]
  #[builder(start_fn = new, finish_fn = build)]
  pub fn _new(#[builder(start_fn)] source: S, normalizer: Option<Box<dyn Normalizer>>, abort: Option<Arc<AtomicBool>>) -> Didar<S> {
    crate::init();

    Didar {
      source,
      normalizer: normalizer.unwrap_or_else(|| Box::new(PersianNormalizer)),
      abort,
    }
  }

  /// Fetches the event's records from the source and runs a matching pass
  /// over them.
  #[instrument(name = "find_duplicates", skip_all, fields(event_id = event_id))]
  pub fn find_duplicates(&self, event_id: i64, params: &MatchParams) -> Result<MatchReport, DidarError> {
    let records = self.source.records(event_id)?;

    self.match_records(records, params)
  }

  /// Runs a matching pass over records the caller already holds.
  #[instrument(name = "match_records", skip_all, fields(records = records.len()))]
  pub fn match_records(&self, records: Vec<Record>, params: &MatchParams) -> Result<MatchReport, DidarError> {
    params.check()?;

    let mut normalized = Vec::with_capacity(records.len());
    let mut skipped = 0;

    for (index, record) in records.iter().enumerate() {
      match NormalizedRecord::derive(index, record, self.normalizer.as_ref()) {
        Ok(entry) => normalized.push(entry),
        Err(err) => {
          tracing::warn!(record = record.id, %err, "skipping record");

          skipped += 1;
        }
      }
    }

    let stop_names = StopNames::from_records(normalized.iter(), params.min_freq);
    let candidates = candidates::generate(&normalized, params, self.abort.as_deref())?;

    tracing::debug!(candidates = candidates.len(), "generated candidate pairs");

    let scored = scoring::score_candidates(&normalized, candidates, params, &stop_names, self.abort.as_deref())?;

    Ok(assemble::report(&records, &normalized, scored, params, skipped))
  }
}
