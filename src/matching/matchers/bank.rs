use bumpalo::Bump;
use didar_macros::scoring_feature;

use crate::{
  matching::{Feature, comparers::ratio},
  normalize::NormalizedRecord,
};

#[scoring_feature(BankTitleSimilarity, name = "bank_title_similarity")]
fn score_feature(&self, _bump: &Bump, lhs: &NormalizedRecord, rhs: &NormalizedRecord) -> f64 {
  ratio(&lhs.bank_title, &rhs.bank_title)
}
