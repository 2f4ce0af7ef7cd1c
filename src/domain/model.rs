use serde::{Deserialize, Serialize};

/// The three custom-object properties managed by this app. Every payload
/// sent upstream carries all three, empty string when the user left one out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CobjProperties {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub species: String,
}

/// One record as returned by the CRM list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CobjRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub properties: CobjProperties,
}

/// Envelope of the CRM list response. `results` 缺少時視為空陣列。
#[derive(Debug, Clone, Deserialize)]
pub struct ListCobjResponse {
    #[serde(default)]
    pub results: Vec<CobjRecord>,
}

/// Body shape of the CRM create call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCobjRequest {
    pub properties: CobjProperties,
}

/// Raw form submission from the update page. `category` is the legacy field
/// name older versions of the form posted; it maps onto `species`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CobjFormInput {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub species: Option<String>,
    pub category: Option<String>,
}

impl CobjFormInput {
    /// 將表單輸入轉成上游 properties，缺少的欄位補空字串。
    ///
    /// A non-empty `species` wins over `category`; an empty or missing
    /// `species` falls back to `category`.
    pub fn into_properties(self) -> CobjProperties {
        let species = match self.species {
            Some(s) if !s.is_empty() => s,
            _ => self.category.unwrap_or_default(),
        };

        CobjProperties {
            name: self.name.unwrap_or_default(),
            bio: self.bio.unwrap_or_default(),
            species,
        }
    }
}
