use serde::{Deserialize, Deserializer, Serialize};

/// A client quote served by `GET /testimonials`.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Testimonial {
    #[serde(default, deserialize_with = "opaque_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
}

impl Testimonial {
    pub fn new(id: &str, name: &str, message: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}

/// Body of `POST /feedback`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Error body the backend may attach to a rejected request.
#[derive(Deserialize, Debug)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
    Missing(()),
}

// Ids are only used as render keys, so numbers are kept as their decimal text.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
        RawId::Missing(()) => String::new(),
    })
}
