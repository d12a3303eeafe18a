use bumpalo::Bump;
use didar_macros::scoring_feature;

use crate::{
  matching::{Feature, comparers::partial_ratio},
  normalize::NormalizedRecord,
};

#[scoring_feature(PostSimilarity, name = "post_similarity")]
fn score_feature(&self, _bump: &Bump, lhs: &NormalizedRecord, rhs: &NormalizedRecord) -> f64 {
  partial_ratio(&lhs.post, &rhs.post)
}
