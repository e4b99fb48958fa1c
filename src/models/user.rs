use serde::{Deserialize, Serialize};

use super::object_id::UserId;

/// User document as stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    /// Document id; stored under `_id`, rendered as a hex string
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub name: String,
    pub username: String,
    pub email: String,
}
