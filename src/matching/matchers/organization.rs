use bumpalo::Bump;
use didar_macros::scoring_feature;

use crate::{
  matching::{Feature, comparers::token_sort_ratio},
  normalize::NormalizedRecord,
};

// Sorted full-token comparison, not a partial one: short titles score too
// high against windows of longer ones.
#[scoring_feature(OrganizationSimilarity, name = "organization_similarity")]
fn score_feature(&self, bump: &Bump, lhs: &NormalizedRecord, rhs: &NormalizedRecord) -> f64 {
  token_sort_ratio(bump, &lhs.organization, &rhs.organization)
}
