use bon::bon;
use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};

/// One person record attached to an event, as supplied by the record source.
///
/// `first_name` and `last_name` are required; every other text field defaults
/// to an empty string when the source does not carry it. The engine never
/// mutates a record, it only derives normalized copies.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Record {
  pub id: i64,
  pub first_name: String,
  pub last_name: String,
  #[serde(default)]
  pub organization: String,
  #[serde(default)]
  pub organization_type: String,
  #[serde(default)]
  pub company: String,
  #[serde(default)]
  pub holding: String,
  #[serde(default)]
  pub post: String,
  #[serde(default)]
  pub mobile: String,
  #[serde(default)]
  pub bank_title: String,
  #[serde(default)]
  pub is_head: Option<bool>,
  #[serde(default)]
  pub event_id: i64,
}

#[bon]
impl Record {
  #[builder]
  pub fn builder(
    #[builder(start_fn)] id: i64,
    first_name: &str,
    last_name: &str,
    organization: Option<&str>,
    organization_type: Option<&str>,
    company: Option<&str>,
    holding: Option<&str>,
    post: Option<&str>,
    mobile: Option<&str>,
    bank_title: Option<&str>,
    is_head: Option<bool>,
    event_id: Option<i64>,
  ) -> Record {
    Record {
      id,
      first_name: first_name.to_string(),
      last_name: last_name.to_string(),
      organization: organization.unwrap_or_default().to_string(),
      organization_type: organization_type.unwrap_or_default().to_string(),
      company: company.unwrap_or_default().to_string(),
      holding: holding.unwrap_or_default().to_string(),
      post: post.unwrap_or_default().to_string(),
      mobile: mobile.unwrap_or_default().to_string(),
      bank_title: bank_title.unwrap_or_default().to_string(),
      is_head,
      event_id: event_id.unwrap_or_default(),
    }
  }
}

/// One side of a reported pair, carrying the record's display context.
#[derive(Clone, Debug, Serialize)]
pub struct PairContext {
  pub id: i64,
  pub name: String,
  pub post: String,
  pub organization: String,
  pub organization_type: String,
  pub company: String,
  pub holding: String,
  pub mobile: String,
}

impl PairContext {
  pub(crate) fn from_record(record: &Record) -> PairContext {
    PairContext {
      id: record.id,
      name: format!("{} {}", record.first_name, record.last_name).trim().to_string(),
      post: record.post.clone(),
      organization: display_organization(record),
      organization_type: record.organization_type.clone(),
      company: record.company.clone(),
      holding: record.holding.clone(),
      mobile: record.mobile.clone(),
    }
  }
}

// Branch attendees are listed under their branch bank rather than the head
// organization alone.
fn display_organization(record: &Record) -> String {
  match record.is_head {
    Some(false) if !record.bank_title.trim().is_empty() => match record.organization.trim().is_empty() {
      true => record.bank_title.trim().to_string(),
      false => format!("{} - {}", record.organization.trim(), record.bank_title.trim()),
    },
    _ => record.organization.clone(),
  }
}

/// A pair of records judged similar enough to report, with the per-field
/// similarities that produced the verdict.
///
/// `left` always holds the smaller identifier. `score` is a percentage with
/// one decimal of precision. A gated-off field never shows up in `features`,
/// so their presence tells which terms contributed.
#[derive(Clone, Debug, Serialize)]
pub struct MatchedPair {
  pub left: PairContext,
  pub right: PairContext,
  pub score: f64,
  #[serde(serialize_with = "features_to_map", skip_serializing_if = "Vec::is_empty")]
  pub features: Vec<(&'static str, f64)>,
}

/// The outcome of one matching run.
#[derive(Clone, Debug, Serialize)]
pub struct MatchReport {
  pub total_pairs: usize,
  pub pairs: Vec<MatchedPair>,
  pub skipped_records: usize,
}

fn features_to_map<S: Serializer>(input: &[(&'static str, f64)], ser: S) -> Result<S::Ok, S::Error> {
  if input.is_empty() {
    return ser.serialize_unit();
  }

  let mut map = ser.serialize_map(Some(input.len()))?;
  for (k, v) in input {
    map.serialize_entry(k, &v)?;
  }
  map.end()
}
