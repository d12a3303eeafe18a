use std::sync::LazyLock;

use any_ascii::any_ascii;
use regex::Regex;

static DIGIT_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// How many trailing digits of a mobile number are kept, so "+98 912…" and
/// "0912…" line up on their significant part.
pub(crate) const SIGNIFICANT_DIGITS: usize = 11;

pub(crate) fn significant_digits(value: &str) -> String {
  let folded = any_ascii(value);
  let digits = DIGIT_RUNS.find_iter(&folded).map(|run| run.as_str()).collect::<String>();

  let skip = digits.len().saturating_sub(SIGNIFICANT_DIGITS);

  digits[skip..].to_string()
}
