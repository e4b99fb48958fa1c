use mongodb::bson::oid::ObjectId;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// MongoDB document id validated at the boundary.
///
/// Wraps `ObjectId` so the wire form is always the 24-char hex string:
/// parsing rejects anything else, serialization never emits the BSON
/// structured form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(ObjectId);

/// Validation failure for a would-be document id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidObjectId;

impl fmt::Display for InvalidObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid objectid")
    }
}

impl std::error::Error for InvalidObjectId {}

impl UserId {
    /// Generate a fresh id
    pub fn new() -> Self {
        UserId(ObjectId::new())
    }

    /// Validate `value` as a 24-char hex object id
    pub fn parse(value: &str) -> Result<Self, InvalidObjectId> {
        ObjectId::parse_str(value)
            .map(UserId)
            .map_err(|_| InvalidObjectId)
    }

    /// Canonical string form (lowercase hex)
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// Underlying BSON object id, for building queries
    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for UserId {
    fn from(oid: ObjectId) -> Self {
        UserId(oid)
    }
}

impl FromStr for UserId {
    type Err = InvalidObjectId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl Serialize for UserId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        UserId::parse(&value).map_err(de::Error::custom)
    }
}
