use std::sync::atomic::{AtomicBool, Ordering};

use bumpalo::Bump;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
  error::DidarError,
  matching::{Feature, FirstNameSimilarity, LastNameSimilarity, MatchParams},
  normalize::NormalizedRecord,
};

/// An unordered pair of record indices whose name similarity cleared the
/// pre-filter, carrying the similarities so the scorer does not recompute
/// them. `left < right` by construction, so no `(a, a)` pair exists and each
/// unordered pair shows up at most once.
#[derive(Clone, Debug)]
pub(crate) struct Candidate {
  pub(crate) left: usize,
  pub(crate) right: usize,
  pub(crate) first_sim: f64,
  pub(crate) last_sim: f64,
}

pub(crate) fn name_score(params: &MatchParams, first_sim: f64, last_sim: f64) -> f64 {
  (params.last_weight * last_sim + params.first_weight * first_sim) / (params.last_weight + params.first_weight)
}

/// Enumerates every unordered pair, keeping those whose blended name score
/// reaches `name_threshold`. Rows are scanned as independent partitions and
/// their survivors merged, so the quadratic sweep spreads over the thread
/// pool without shared mutable state.
pub(crate) fn generate(records: &[NormalizedRecord], params: &MatchParams, abort: Option<&AtomicBool>) -> Result<Vec<Candidate>, DidarError> {
  let rows = (0..records.len())
    .into_par_iter()
    .map_init(Bump::new, |bump, row| {
      if abort.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
        return Err(DidarError::Aborted);
      }

      let lhs = &records[row];
      let mut survivors = Vec::new();

      for (offset, rhs) in records[row + 1..].iter().enumerate() {
        let first_sim = FirstNameSimilarity.score_feature(bump, lhs, rhs);
        let last_sim = LastNameSimilarity.score_feature(bump, lhs, rhs);

        bump.reset();

        if name_score(params, first_sim, last_sim) >= params.name_threshold {
          survivors.push(Candidate { left: row, right: row + 1 + offset, first_sim, last_sim });
        }
      }

      Ok(survivors)
    })
    .collect::<Result<Vec<_>, _>>()?;

  Ok(rows.into_iter().flatten().collect())
}
