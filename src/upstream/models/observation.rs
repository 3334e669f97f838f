use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::upstream::repository::Resource;

/// Row of the `observations` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub id: String,
    #[serde(flatten)]
    pub fields: ObservationFields,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A sighting reported by an observer. `id_specie` and `id_observer_user`
/// are opaque references, not checked by the proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObservationFields {
    pub date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_observation: Option<String>,
    #[serde(default)]
    pub verification_status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_percentage: Option<f64>,
    pub specie_scientific_name: String,
    pub specie_common_name: String,
    pub id_specie: String,
    pub id_observer_user: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObservationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_observation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specie_scientific_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specie_common_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_specie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_observer_user: Option<String>,
}

impl Resource for Observation {
    const TABLE: &'static str = "observations";
    const LABEL: &'static str = "Observation";
    const SEARCH_COLUMN: &'static str = "specie_common_name";

    type Create = ObservationFields;
    type Patch = ObservationPatch;
}
