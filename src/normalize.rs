use anyhow::bail;
use itertools::Itertools;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{
  matching::{extractors, replacers},
  model::Record,
};

/// Canonicalization contract for raw text fields.
///
/// Implementations must be deterministic and idempotent, and must map empty
/// input to an empty string rather than failing. A record whose text cannot
/// be processed is skipped by the engine, it does not abort the batch.
pub trait Normalizer: Send + Sync {
  fn normalize(&self, text: &str) -> anyhow::Result<String>;
}

/// Default normalizer for Persian guest lists.
#[derive(Clone, Copy, Debug, Default)]
pub struct PersianNormalizer;

impl Normalizer for PersianNormalizer {
  fn normalize(&self, text: &str) -> anyhow::Result<String> {
    Ok(canonicalize(text))
  }
}

pub(crate) fn canonicalize(text: &str) -> String {
  if text.is_empty() {
    return String::new();
  }

  let folded = text
    .nfkd()
    .flat_map(char::to_lowercase)
    .filter(|c| !is_combining_mark(*c) && !is_invisible(*c))
    .map(unify)
    .collect::<String>();

  folded.split_whitespace().join(" ")
}

// Joiners, direction marks and soft hyphens shape the rendering without
// carrying content.
fn is_invisible(c: char) -> bool {
  matches!(c, '\u{200c}' | '\u{200d}' | '\u{200e}' | '\u{200f}' | '\u{00ad}' | '\u{feff}')
}

// Arabic variants are folded onto the Persian letters used in the rest of a
// typical guest list, and eastern digits onto ASCII.
fn unify(c: char) -> char {
  match c {
    'ي' | 'ى' => 'ی',
    'ك' => 'ک',
    'ة' => 'ه',
    'أ' | 'إ' | 'ٱ' => 'ا',
    'ؤ' => 'و',
    '٠'..='٩' => char::from(b'0' + (c as u32 - 0x0660) as u8),
    '۰'..='۹' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
    _ => c,
  }
}

/// A [Record] with every scored field reduced to its canonical form, derived
/// once per record at the start of a run.
#[derive(Clone, Debug)]
pub(crate) struct NormalizedRecord {
  pub(crate) index: usize,
  pub(crate) id: i64,
  pub(crate) first_name: String,
  pub(crate) last_name: String,
  pub(crate) organization: String,
  pub(crate) post: String,
  pub(crate) mobile: String,
  pub(crate) bank_title: String,
}

impl NormalizedRecord {
  pub(crate) fn derive(index: usize, record: &Record, normalizer: &dyn Normalizer) -> anyhow::Result<NormalizedRecord> {
    let first_name = replacers::strip_honorifics(&normalizer.normalize(&record.first_name)?);
    let last_name = replacers::strip_honorifics(&normalizer.normalize(&record.last_name)?);

    if first_name.is_empty() && last_name.is_empty() {
      bail!("record has no usable name");
    }

    Ok(NormalizedRecord {
      index,
      id: record.id,
      first_name,
      last_name,
      organization: normalizer.normalize(&record.organization)?,
      post: normalizer.normalize(&record.post)?,
      mobile: extractors::significant_digits(&normalizer.normalize(&record.mobile)?),
      bank_title: normalizer.normalize(&record.bank_title)?,
    })
  }
}
