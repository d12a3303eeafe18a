use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind, StartKind};
use serde::Deserialize;

use crate::{matching::replacers::Dictionaries, normalize};

pub(crate) static HONORIFICS: LazyLock<AhoCorasick> = LazyLock::new(|| {
  let file = Dictionaries::get("honorifics.yml").expect("could not read honorifics dictionary");
  let dictionary = serde_yaml::from_slice::<HonorificDictionary>(&file.data).expect("could not unmarshal honorifics dictionary");

  // Patterns go through the same canonicalization as the names they are
  // matched against.
  let patterns = dictionary.person_name_prefixes.iter().map(|prefix| normalize::canonicalize(prefix)).collect::<Vec<_>>();

  AhoCorasickBuilder::new()
    .match_kind(MatchKind::LeftmostLongest)
    .start_kind(StartKind::Anchored)
    .build(patterns)
    .expect("could not build honorifics automaton")
});

#[derive(Deserialize)]
struct HonorificDictionary {
  #[serde(rename = "PERSON_NAME_PREFIXES")]
  person_name_prefixes: Vec<String>,
}
