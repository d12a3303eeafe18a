use std::cmp::Ordering;

use crate::{
  matching::MatchParams,
  model::{MatchReport, MatchedPair, PairContext, Record},
  normalize::NormalizedRecord,
  scoring::ScoredCandidate,
};

/// Turns scored candidates into the final report: applies the optional
/// composite cutoff, orients each pair by ascending identifier, rounds scores
/// to one decimal of a percentage and produces a deterministic ordering —
/// descending score, then ascending identifier pair.
pub(crate) fn report(records: &[Record], normalized: &[NormalizedRecord], scored: Vec<ScoredCandidate>, params: &MatchParams, skipped_records: usize) -> MatchReport {
  let mut pairs = scored
    .into_iter()
    .filter(|entry| params.score_threshold.is_none_or(|threshold| entry.score >= threshold))
    .map(|entry| {
      let left = &records[normalized[entry.candidate.left].index];
      let right = &records[normalized[entry.candidate.right].index];

      let (left, right) = match left.id <= right.id {
        true => (left, right),
        false => (right, left),
      };

      MatchedPair {
        left: PairContext::from_record(left),
        right: PairContext::from_record(right),
        score: (entry.score * 1000.0).round() / 10.0,
        features: entry.features.into_iter().filter(|(_, score)| score > &0.0).collect(),
      }
    })
    .collect::<Vec<_>>();

  pairs.sort_unstable_by(|a, b| {
    b.score
      .partial_cmp(&a.score)
      .unwrap_or(Ordering::Equal)
      .then_with(|| (a.left.id, a.right.id).cmp(&(b.left.id, b.right.id)))
  });

  MatchReport { total_pairs: pairs.len(), pairs, skipped_records }
}

#[cfg(test)]
mod tests {
  use crate::{
    candidates::Candidate,
    matching::MatchParams,
    model::Record,
    scoring::ScoredCandidate,
    tests::normalized,
  };

  fn fixture() -> (Vec<Record>, Vec<crate::normalize::NormalizedRecord>) {
    let records = vec![
      Record::builder(12).first_name("علی").last_name("احمدی").build(),
      Record::builder(4).first_name("علی").last_name("احمدی").build(),
      Record::builder(9).first_name("علی").last_name("احمدی").build(),
    ];

    let normalized = vec![normalized_at(0, 12), normalized_at(1, 4), normalized_at(2, 9)];

    (records, normalized)
  }

  fn normalized_at(index: usize, id: i64) -> crate::normalize::NormalizedRecord {
    let mut record = normalized(id, "علی", "احمدی");
    record.index = index;
    record
  }

  fn scored(left: usize, right: usize, score: f64) -> ScoredCandidate {
    ScoredCandidate {
      candidate: Candidate { left, right, first_sim: 1.0, last_sim: 1.0 },
      score,
      features: vec![("last_name_similarity", 1.0), ("post_similarity", 0.0)],
    }
  }

  #[test]
  fn orders_by_score_then_identifiers() {
    let (records, normalized) = fixture();
    let entries = vec![scored(0, 1, 0.8), scored(1, 2, 0.91), scored(0, 2, 0.8)];

    let report = super::report(&records, &normalized, entries, &MatchParams::default(), 0);

    assert_eq!(report.total_pairs, 3);
    assert_eq!(report.pairs[0].score, 91.0);
    assert_eq!((report.pairs[1].left.id, report.pairs[1].right.id), (4, 12));
    assert_eq!((report.pairs[2].left.id, report.pairs[2].right.id), (9, 12));
  }

  #[test]
  fn pairs_face_their_smaller_identifier_left() {
    let (records, normalized) = fixture();

    let report = super::report(&records, &normalized, vec![scored(0, 1, 0.9)], &MatchParams::default(), 0);

    assert_eq!(report.pairs[0].left.id, 4);
    assert_eq!(report.pairs[0].right.id, 12);
  }

  #[test]
  fn rounds_to_one_decimal() {
    let (records, normalized) = fixture();

    let report = super::report(&records, &normalized, vec![scored(0, 1, 0.91549)], &MatchParams::default(), 0);

    assert_eq!(report.pairs[0].score, 91.5);
  }

  #[test]
  fn zero_scored_features_are_not_reported() {
    let (records, normalized) = fixture();

    let report = super::report(&records, &normalized, vec![scored(0, 1, 0.9)], &MatchParams::default(), 0);

    assert_eq!(report.pairs[0].features, vec![("last_name_similarity", 1.0)]);
  }

  #[test]
  fn composite_cutoff_drops_low_pairs() {
    let (records, normalized) = fixture();
    let entries = vec![scored(0, 1, 0.6), scored(1, 2, 0.95)];
    let params = MatchParams { score_threshold: Some(0.9), ..Default::default() };

    let report = super::report(&records, &normalized, entries, &params, 2);

    assert_eq!(report.total_pairs, 1);
    assert_eq!(report.pairs[0].score, 95.0);
    assert_eq!(report.skipped_records, 2);
  }
}
