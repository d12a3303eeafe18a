use bumpalo::Bump;
use didar_macros::scoring_feature;

use crate::{
  matching::{Feature, comparers::ratio},
  normalize::NormalizedRecord,
};

/// Fewer digits than this cannot identify a line, whatever the overlap.
const MIN_DIGITS: usize = 10;

#[scoring_feature(MobileSimilarity, name = "mobile_similarity")]
fn score_feature(&self, _bump: &Bump, lhs: &NormalizedRecord, rhs: &NormalizedRecord) -> f64 {
  if lhs.mobile.len() < MIN_DIGITS || rhs.mobile.len() < MIN_DIGITS {
    return 0.0;
  }

  ratio(&lhs.mobile, &rhs.mobile)
}
