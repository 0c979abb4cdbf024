// Raw response shapes for the user-directory upstream.
//
// These mirror the wire format exactly; normalization into the canonical
// domain model happens in `storefront-core`. Text fields default to empty
// because the upstream echoes partial bodies back from write operations.

use serde::{Deserialize, Serialize};

/// A user record as returned by the directory upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub id: i64,
    /// Display name, e.g. `"Leanne Graham"`.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub address: Option<RawAddress>,
    #[serde(default)]
    pub company: Option<RawCompany>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAddress {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub geo: Option<RawGeo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGeo {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lng: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCompany {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub catch_phrase: String,
    #[serde(default)]
    pub bs: String,
}

/// Write body for user create/update, in upstream field names.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserWriteBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}
