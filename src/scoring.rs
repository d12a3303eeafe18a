use std::sync::atomic::{AtomicBool, Ordering};

use bumpalo::Bump;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::instrument;

use crate::{
  candidates::Candidate,
  error::DidarError,
  frequency::StopNames,
  matching::{MatchParams, composite::WeightedComposite},
  normalize::NormalizedRecord,
};

pub(crate) struct ScoredCandidate {
  pub(crate) candidate: Candidate,
  pub(crate) score: f64,
  pub(crate) features: Vec<(&'static str, f64)>,
}

/// Scores every surviving candidate on the thread pool. Workers only read the
/// shared record set, parameters and stop names; each yields its own scored
/// subset and the results are merged once, so an abort or failure produces no
/// partial output.
#[instrument(name = "score_candidates", skip_all, fields(candidates = candidates.len()))]
pub(crate) fn score_candidates(
  records: &[NormalizedRecord],
  candidates: Vec<Candidate>,
  params: &MatchParams,
  stop_names: &StopNames,
  abort: Option<&AtomicBool>,
) -> Result<Vec<ScoredCandidate>, DidarError> {
  candidates
    .into_par_iter()
    .map_init(Bump::new, |bump, candidate| {
      if abort.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
        return Err(DidarError::Aborted);
      }

      let lhs = &records[candidate.left];
      let rhs = &records[candidate.right];

      let (score, features) = WeightedComposite::score(bump, params, stop_names, lhs, rhs, &candidate);

      bump.reset();

      tracing::debug!(lhs = lhs.id, rhs = rhs.id, score = score, "computed composite score");

      Ok(ScoredCandidate { candidate, score, features })
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use std::sync::atomic::AtomicBool;

  use crate::{
    candidates::Candidate,
    error::DidarError,
    frequency::StopNames,
    matching::MatchParams,
    tests::normalized,
  };

  #[test]
  fn scores_every_candidate() {
    let records = vec![normalized(1, "علی", "احمدی"), normalized(2, "علی", "احمدی"), normalized(3, "علی", "احمدی")];
    let stop_names = StopNames::from_records(std::iter::empty(), 3);

    let candidates = vec![
      Candidate { left: 0, right: 1, first_sim: 1.0, last_sim: 1.0 },
      Candidate { left: 0, right: 2, first_sim: 1.0, last_sim: 1.0 },
    ];

    let scored = super::score_candidates(&records, candidates, &MatchParams::default(), &stop_names, None).unwrap();

    assert_eq!(scored.len(), 2);
    assert!(scored.iter().all(|entry| (0.0..=1.0).contains(&entry.score)));
  }

  #[test]
  fn raised_flag_aborts_scoring() {
    let records = vec![normalized(1, "علی", "احمدی"), normalized(2, "علی", "احمدی")];
    let stop_names = StopNames::from_records(std::iter::empty(), 3);
    let candidates = vec![Candidate { left: 0, right: 1, first_sim: 1.0, last_sim: 1.0 }];
    let abort = AtomicBool::new(true);

    let result = super::score_candidates(&records, candidates, &MatchParams::default(), &stop_names, Some(&abort));

    assert!(matches!(result, Err(DidarError::Aborted)));
  }
}
