use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::web::error::HoroscopeError;

/// Body of `POST /generate-horoscope`. Fields are kept as raw JSON so that
/// presence is judged before any type is required of them.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HoroscopeRequest {
    pub name: Option<Value>,
    pub dob: Option<Value>,
    #[serde(rename = "placeOfBirth")]
    pub place_of_birth: Option<Value>,
    pub gender: Option<Value>,
}

/// A request with every field present and holding a string.
#[derive(Debug, Clone, Copy)]
pub struct BirthDetails<'a> {
    pub name: &'a str,
    pub dob: &'a str,
    pub place_of_birth: &'a str,
    pub gender: &'a str,
}

// Absent, null, false, zero and empty strings, arrays or objects are missing.
fn is_present(field: &Option<Value>) -> bool {
    match field {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |v| v != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
        Some(Value::Bool(true)) => true,
    }
}

fn as_text<'a>(
    field: &'static str,
    value: &'a Option<Value>,
) -> Result<&'a str, HoroscopeError> {
    match value {
        Some(Value::String(s)) => Ok(s),
        other => Err(HoroscopeError::NonStringField {
            field,
            value: other.clone().unwrap_or(Value::Null).to_string(),
        }),
    }
}

impl HoroscopeRequest {
    pub fn has_required_fields(&self) -> bool {
        [&self.name, &self.dob, &self.place_of_birth, &self.gender]
            .into_iter()
            .all(is_present)
    }

    /// Checks presence first, then that every field is a string.
    pub fn details(&self) -> Result<BirthDetails<'_>, HoroscopeError> {
        if !self.has_required_fields() {
            return Err(HoroscopeError::MissingFields);
        }

        Ok(BirthDetails {
            name: as_text("name", &self.name)?,
            dob: as_text("dob", &self.dob)?,
            place_of_birth: as_text("placeOfBirth", &self.place_of_birth)?,
            gender: as_text("gender", &self.gender)?,
        })
    }
}

/// The shape the model is asked to reply with.
#[derive(Debug, Serialize, Deserialize)]
pub struct HoroscopeResponse {
    pub daily: String,
    pub weekly: String,
    pub monthly: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "system")]
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}
