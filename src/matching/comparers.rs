use bumpalo::{
  Bump,
  collections::{CollectIn, String as BumpString, Vec as BumpVec},
};
use strsim::{generic_levenshtein, normalized_levenshtein};

/// Normalized edit-distance similarity. Symmetric, 1 for identical non-empty
/// strings, 0 whenever either side is empty.
pub(crate) fn ratio(lhs: &str, rhs: &str) -> f64 {
  if lhs.is_empty() || rhs.is_empty() {
    return 0.0;
  }

  if lhs == rhs {
    return 1.0;
  }

  normalized_levenshtein(lhs, rhs)
}

/// [ratio] over whitespace tokens sorted into a canonical order, so
/// "علی رضا احمدی" and "احمدی علی رضا" compare as equals.
pub(crate) fn token_sort_ratio(bump: &Bump, lhs: &str, rhs: &str) -> f64 {
  ratio(&sorted_tokens(bump, lhs), &sorted_tokens(bump, rhs))
}

fn sorted_tokens<'b>(bump: &'b Bump, value: &str) -> BumpString<'b> {
  let mut tokens = value.split_whitespace().collect_in::<BumpVec<_>>(bump);

  tokens.sort_unstable();

  let mut out = BumpString::with_capacity_in(value.len(), bump);

  for (index, token) in tokens.iter().enumerate() {
    if index > 0 {
      out.push(' ');
    }

    out.push_str(token);
  }

  out
}

/// Best [ratio] of the shorter string against every equal-length character
/// window of the longer, so a post buried in a longer title still matches.
pub(crate) fn partial_ratio(lhs: &str, rhs: &str) -> f64 {
  if lhs.is_empty() || rhs.is_empty() {
    return 0.0;
  }

  if lhs == rhs {
    return 1.0;
  }

  let lhs = lhs.chars().collect::<Vec<_>>();
  let rhs = rhs.chars().collect::<Vec<_>>();
  let (shorter, longer) = if lhs.len() <= rhs.len() { (lhs, rhs) } else { (rhs, lhs) };

  let mut best = 0.0f64;

  for window in longer.windows(shorter.len()) {
    let distance = generic_levenshtein(&window.to_vec(), &shorter) as f64;

    best = best.max(1.0 - distance / shorter.len() as f64);

    if best >= 1.0 {
      return 1.0;
    }
  }

  best
}

#[cfg(test)]
mod tests {
  use bumpalo::Bump;
  use float_cmp::assert_approx_eq;

  #[test]
  fn ratio_contract() {
    assert_eq!(super::ratio("احمدی", "احمدی"), 1.0);
    assert_eq!(super::ratio("", "احمدی"), 0.0);
    assert_eq!(super::ratio("احمدی", ""), 0.0);
    assert_eq!(super::ratio("", ""), 0.0);

    assert_approx_eq!(f64, super::ratio("احمدی", "احمدیان"), super::ratio("احمدیان", "احمدی"));
    assert_approx_eq!(f64, super::ratio("abcdefghij", "abcdefghiz"), 0.9, epsilon = 1e-9);
  }

  #[test]
  fn token_sort_ignores_word_order() {
    let bump = Bump::new();

    assert_eq!(super::token_sort_ratio(&bump, "علی رضا احمدی", "احمدی علی رضا"), 1.0);
    assert_eq!(super::token_sort_ratio(&bump, "", "احمدی"), 0.0);

    let shuffled = super::token_sort_ratio(&bump, "بانک ملی ایران", "ایران بانک ملی");
    let straight = super::token_sort_ratio(&bump, "بانک ملی ایران", "بانک ملی ایران");

    assert_eq!(shuffled, straight);
  }

  #[test]
  fn partial_ratio_finds_embedded_matches() {
    assert_eq!(super::partial_ratio("مدیر عامل", "مدیر عامل"), 1.0);
    assert_eq!(super::partial_ratio("عامل", "مدیر عامل"), 1.0);
    assert_eq!(super::partial_ratio("", "مدیر عامل"), 0.0);

    assert_approx_eq!(f64, super::partial_ratio("abcde", "abcxy"), 0.6, epsilon = 1e-9);
    assert_approx_eq!(f64, super::partial_ratio("abcde", "abcxy"), super::partial_ratio("abcxy", "abcde"));
  }
}
