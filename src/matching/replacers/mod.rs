use aho_corasick::{AhoCorasick, Anchored, Input};
use rust_embed::Embed;

pub(crate) mod honorifics;

#[derive(Embed)]
#[folder = "./assets/dictionaries"]
struct Dictionaries;

/// Repeatedly removes dictionary entries anchored at the start of `name`,
/// each ending on a word boundary. A name made of nothing but dictionary
/// entries is returned as-is rather than emptied.
pub(crate) fn strip_leading(aho: &AhoCorasick, name: &str) -> String {
  let mut rest = name.trim_start();

  loop {
    let Some(mat) = aho.find(Input::new(rest).anchored(Anchored::Yes)) else {
      break;
    };

    let tail = &rest[mat.end()..];

    if !tail.starts_with(char::is_whitespace) || tail.trim_start().is_empty() {
      break;
    }

    rest = tail.trim_start();
  }

  rest.to_string()
}

pub(crate) fn strip_honorifics(name: &str) -> String {
  strip_leading(&honorifics::HONORIFICS, name)
}
