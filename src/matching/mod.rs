mod matchers;

use bumpalo::Bump;
use serde::Deserialize;
use serde_inline_default::serde_inline_default;
use validator::Validate;

use crate::{error::DidarError, normalize::NormalizedRecord};

pub(crate) mod comparers;
pub(crate) mod composite;
pub(crate) mod extractors;
pub(crate) mod replacers;

pub(crate) use matchers::{
  bank::BankTitleSimilarity,
  mobile::MobileSimilarity,
  name::{FirstNameSimilarity, LastNameSimilarity},
  organization::OrganizationSimilarity,
  post::PostSimilarity,
};

/// Organization similarity a pair must reach before its post similarity is
/// counted: comparing positions is meaningless across unrelated employers.
pub(crate) const ORG_GATE: f64 = 0.70;

/// Mobile similarity below which the mobile term is dropped, so coincidental
/// partial digit overlap earns nothing.
pub(crate) const MOBILE_GATE: f64 = 0.80;

/// Bank title similarity from which the fixed bonus is awarded.
pub(crate) const BANK_GATE: f64 = 0.80;
pub(crate) const BANK_BONUS: f64 = 0.05;

pub(crate) trait Feature: Send + Sync {
  fn name(&self) -> &'static str;
  fn score_feature(&self, bump: &Bump, lhs: &NormalizedRecord, rhs: &NormalizedRecord) -> f64;
}

/// Tunable knobs of a matching run. Weights are not required to sum to 1.
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct MatchParams {
  /// Minimum blended first/last name similarity for a pair to become a
  /// candidate.
  #[serde_inline_default(0.78)]
  #[validate(range(min = 0.0, max = 1.0, message = "name_threshold must be within [0, 1]"))]
  pub name_threshold: f64,
  #[serde_inline_default(0.40)]
  #[validate(range(min = 0.0, message = "last_weight cannot be negative"))]
  pub last_weight: f64,
  #[serde_inline_default(0.10)]
  #[validate(range(min = 0.0, message = "first_weight cannot be negative"))]
  pub first_weight: f64,
  #[serde_inline_default(0.30)]
  #[validate(range(min = 0.0, message = "org_weight cannot be negative"))]
  pub org_weight: f64,
  #[serde_inline_default(0.15)]
  #[validate(range(min = 0.0, message = "post_weight cannot be negative"))]
  pub post_weight: f64,
  #[serde_inline_default(0.05)]
  #[validate(range(min = 0.0, message = "mobile_weight cannot be negative"))]
  pub mobile_weight: f64,
  /// Occurrence count at which a first or last name becomes common.
  #[serde_inline_default(3)]
  pub min_freq: usize,
  /// Multiplier applied to the similarity of common names.
  #[serde_inline_default(0.75)]
  #[validate(range(min = 0.0, max = 1.0, message = "stop_penalty must be within [0, 1]"))]
  pub stop_penalty: f64,
  #[serde_inline_default(true)]
  pub use_bank_bonus: bool,
  /// Optional cutoff on the composite score (in similarity units). When
  /// unset, every candidate surviving the name pre-filter is reported.
  #[serde(default)]
  #[validate(range(min = 0.0, max = 1.0, message = "score_threshold must be within [0, 1]"))]
  pub score_threshold: Option<f64>,
}

impl Default for MatchParams {
  fn default() -> MatchParams {
    MatchParams {
      name_threshold: 0.78,
      last_weight: 0.40,
      first_weight: 0.10,
      org_weight: 0.30,
      post_weight: 0.15,
      mobile_weight: 0.05,
      min_freq: 3,
      stop_penalty: 0.75,
      use_bank_bonus: true,
      score_threshold: None,
    }
  }
}

impl MatchParams {
  pub(crate) fn check(&self) -> Result<(), DidarError> {
    self.validate().map_err(|err| DidarError::ConfigError(err.to_string()))?;

    if self.min_freq == 0 {
      return Err(DidarError::ConfigError("min_freq must be at least 1".to_string()));
    }

    if self.last_weight + self.first_weight <= 0.0 {
      return Err(DidarError::ConfigError("last_weight and first_weight cannot both be zero".to_string()));
    }

    Ok(())
  }
}
