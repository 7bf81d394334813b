//! Job records as projected from the feed payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::normalize::normalize;

/// CSV header, also the set of keys read from each feed entry.
pub const COLUMNS: [&str; 6] = [
    "url",
    "title",
    "company_name",
    "category",
    "candidate_required_location",
    "description",
];

/// One listing. Every field is optional upstream and defaults to "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub url: String,
    pub title: String,
    pub company_name: String,
    pub category: String,
    pub candidate_required_location: String,
    pub description: String,
}

impl JobRecord {
    /// Project a feed entry onto the fixed field set. Non-object entries
    /// yield an all-empty record.
    pub fn from_value(entry: &Value) -> Self {
        let Some(obj) = entry.as_object() else {
            return Self::default();
        };
        Self {
            url: field_text(obj, "url"),
            title: field_text(obj, "title"),
            company_name: field_text(obj, "company_name"),
            category: field_text(obj, "category"),
            candidate_required_location: field_text(obj, "candidate_required_location"),
            description: field_text(obj, "description"),
        }
    }

    /// CSV row in [`COLUMNS`] order. Only `description` is normalized; the
    /// other fields are written exactly as received.
    pub fn to_row(&self) -> [String; 6] {
        [
            self.url.clone(),
            self.title.clone(),
            self.company_name.clone(),
            self.category.clone(),
            self.candidate_required_location.clone(),
            normalize(&self.description),
        ]
    }
}

/// Missing and null become "", strings pass through, anything else is
/// rendered as compact JSON text.
fn field_text(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// The payload does not have the `{"jobs": [...]}` shape.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("payload is a JSON {0}, expected an object")]
    NotAnObject(&'static str),
    #[error("\"jobs\" is a JSON {0}, expected an array")]
    JobsNotArray(&'static str),
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Pull the job list out of a feed payload, in upstream order.
///
/// A missing or null `jobs` key gives an empty list.
pub fn extract_jobs(payload: &Value) -> Result<Vec<JobRecord>, PayloadError> {
    let obj = payload
        .as_object()
        .ok_or_else(|| PayloadError::NotAnObject(kind_of(payload)))?;
    match obj.get("jobs") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => Ok(entries.iter().map(JobRecord::from_value).collect()),
        Some(other) => Err(PayloadError::JobsNotArray(kind_of(other))),
    }
}

/// Same records with `description` normalized and everything else untouched.
pub fn clean_jobs(jobs: Vec<JobRecord>) -> Vec<JobRecord> {
    jobs.into_iter()
        .map(|mut job| {
            job.description = normalize(&job.description);
            job
        })
        .collect()
}
