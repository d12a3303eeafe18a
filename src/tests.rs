use crate::{candidates::Candidate, model::Record, normalize::NormalizedRecord};

pub(crate) fn normalized(id: i64, first_name: &str, last_name: &str) -> NormalizedRecord {
  normalized_full(id, first_name, last_name, "", "", "", "")
}

pub(crate) fn normalized_full(id: i64, first_name: &str, last_name: &str, organization: &str, post: &str, mobile: &str, bank_title: &str) -> NormalizedRecord {
  NormalizedRecord {
    index: 0,
    id,
    first_name: first_name.to_string(),
    last_name: last_name.to_string(),
    organization: organization.to_string(),
    post: post.to_string(),
    mobile: mobile.to_string(),
    bank_title: bank_title.to_string(),
  }
}

pub(crate) fn normalized_pair_key(candidate: &Candidate) -> (usize, usize) {
  (candidate.left.min(candidate.right), candidate.left.max(candidate.right))
}

/// A small guest list with two likely duplicates (1/2 and 3/4), a common
/// first name (محمد, three occurrences) and one unusable record.
pub(crate) fn guest_list() -> Vec<Record> {
  vec![
    Record::builder(1)
      .first_name("دکتر علی")
      .last_name("احمدی")
      .organization("بانک ملی ایران")
      .post("مدیر عامل")
      .mobile("0912 345 6789")
      .event_id(1)
      .build(),
    Record::builder(2)
      .first_name("علی")
      .last_name("احمدی")
      .organization("بانک ملی")
      .post("مدیرعامل")
      .mobile("+98 912 345 6789")
      .event_id(1)
      .build(),
    Record::builder(3).first_name("محمد").last_name("رضایی").organization("شرکت فولاد مبارکه").event_id(1).build(),
    Record::builder(4).first_name("محمد").last_name("رضائی").organization("فولاد مبارکه").event_id(1).build(),
    Record::builder(5).first_name("محمد").last_name("کریمی").event_id(1).build(),
    Record::builder(6).first_name("مریم").last_name("موسوی").organization("بیمه ایران").event_id(1).build(),
    Record::builder(7).first_name("سارا").last_name("محمدیان").event_id(1).build(),
    Record::builder(8).first_name("").last_name("").event_id(1).build(),
  ]
}
