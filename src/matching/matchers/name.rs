use bumpalo::Bump;
use didar_macros::scoring_feature;

use crate::{
  matching::{Feature, comparers::token_sort_ratio},
  normalize::NormalizedRecord,
};

#[scoring_feature(FirstNameSimilarity, name = "first_name_similarity")]
fn score_feature(&self, bump: &Bump, lhs: &NormalizedRecord, rhs: &NormalizedRecord) -> f64 {
  token_sort_ratio(bump, &lhs.first_name, &rhs.first_name)
}

#[scoring_feature(LastNameSimilarity, name = "last_name_similarity")]
fn score_feature(&self, bump: &Bump, lhs: &NormalizedRecord, rhs: &NormalizedRecord) -> f64 {
  token_sort_ratio(bump, &lhs.last_name, &rhs.last_name)
}
