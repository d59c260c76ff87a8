use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A rental client with the strict minimum of information the desk needs.
///
/// Records are immutable after creation; the only way out of the system is an
/// explicit deletion by national id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Row id assigned by the store, `None` until persisted.
    pub id: Option<i64>,
    pub full_name: String,
    /// CIN, stored uppercase; unique case-insensitively.
    pub national_id: String,
    /// YYYY-MM-DD
    pub birth_date: String,
    pub age: i64,
    pub license_types: BTreeSet<String>,
}

// Two clients are the same client iff they carry the same CIN.
impl PartialEq for ClientRecord {
    fn eq(&self, other: &Self) -> bool {
        self.national_id.eq_ignore_ascii_case(&other.national_id)
    }
}

impl Eq for ClientRecord {}

impl fmt::Display for ClientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}\nCIN: {}\nBirth date: {}\nAge: {}",
            self.full_name, self.national_id, self.birth_date, self.age
        )
    }
}
