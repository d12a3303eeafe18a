use bumpalo::Bump;

use crate::{
  candidates::Candidate,
  frequency::StopNames,
  matching::{
    BANK_BONUS, BANK_GATE, BankTitleSimilarity, Feature, FirstNameSimilarity, LastNameSimilarity, MOBILE_GATE, MatchParams, MobileSimilarity, ORG_GATE, OrganizationSimilarity,
    PostSimilarity,
  },
  normalize::NormalizedRecord,
};

/// The composite scorer: weighted per-field similarities, with the post and
/// mobile terms behind their gates and common names discounted.
pub(crate) struct WeightedComposite;

impl WeightedComposite {
  pub(crate) fn score(
    bump: &Bump,
    params: &MatchParams,
    stop_names: &StopNames,
    lhs: &NormalizedRecord,
    rhs: &NormalizedRecord,
    candidate: &Candidate,
  ) -> (f64, Vec<(&'static str, f64)>) {
    let mut features = Vec::with_capacity(6);

    let last_sim = match stop_names.common_last(&lhs.last_name) || stop_names.common_last(&rhs.last_name) {
      true => candidate.last_sim * params.stop_penalty,
      false => candidate.last_sim,
    };

    let first_sim = match stop_names.common_first(&lhs.first_name) || stop_names.common_first(&rhs.first_name) {
      true => candidate.first_sim * params.stop_penalty,
      false => candidate.first_sim,
    };

    features.push((LastNameSimilarity.name(), last_sim));
    features.push((FirstNameSimilarity.name(), first_sim));

    let org_sim = OrganizationSimilarity.score_feature(bump, lhs, rhs);

    features.push((OrganizationSimilarity.name(), org_sim));

    let post_sim = match org_sim >= ORG_GATE {
      true => PostSimilarity.score_feature(bump, lhs, rhs),
      false => 0.0,
    };

    features.push((PostSimilarity.name(), post_sim));

    let mobile_sim = MobileSimilarity.score_feature(bump, lhs, rhs);
    let mobile_sim = match mobile_sim >= MOBILE_GATE {
      true => mobile_sim,
      false => 0.0,
    };

    features.push((MobileSimilarity.name(), mobile_sim));

    let bank_bonus = match params.use_bank_bonus && BankTitleSimilarity.score_feature(bump, lhs, rhs) >= BANK_GATE {
      true => BANK_BONUS,
      false => 0.0,
    };

    features.push(("bank_title_bonus", bank_bonus));

    let score = params.last_weight * last_sim
      + params.first_weight * first_sim
      + params.org_weight * org_sim
      + params.post_weight * post_sim
      + params.mobile_weight * mobile_sim
      + bank_bonus;

    (score.clamp(0.0, 1.0), features)
  }
}
