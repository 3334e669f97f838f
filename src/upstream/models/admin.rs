use serde::{Deserialize, Serialize};

use crate::upstream::repository::Resource;

/// Row of the `admins` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub id: String,
    #[serde(flatten)]
    pub fields: AdminFields,
    pub created_at: String,
}

/// Writable columns, also the create payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdminFields {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdminPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Resource for Admin {
    const TABLE: &'static str = "admins";
    const LABEL: &'static str = "Admin";
    const SEARCH_COLUMN: &'static str = "username";

    type Create = AdminFields;
    type Patch = AdminPatch;
}
