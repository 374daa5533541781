use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{Entity, Submission};

/// Composite key of a room-amenity association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomAmenityKey {
    pub room_id: i64,
    pub amenity_id: i64,
}

impl fmt::Display for RoomAmenityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room {} / amenity {}", self.room_id, self.amenity_id)
    }
}

/// Association row with the names of both ends loaded eagerly.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct RoomAmenity {
    pub room_id: i64,
    pub amenity_id: i64,
    pub version: i64,
    pub room_name: String,
    pub amenity_name: String,
}

impl Entity for RoomAmenity {
    type Key = RoomAmenityKey;
    type Form = RoomAmenityForm;

    const NAME: &'static str = "room amenity";

    fn key(&self) -> RoomAmenityKey {
        RoomAmenityKey {
            room_id: self.room_id,
            amenity_id: self.amenity_id,
        }
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RoomAmenityForm {
    #[serde(default)]
    #[validate(range(min = 1, message = "Select a room."))]
    pub room_id: i64,
    #[serde(default)]
    #[validate(range(min = 1, message = "Select an amenity."))]
    pub amenity_id: i64,
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub csrf_token: String,
}

impl RoomAmenityForm {
    pub fn key(&self) -> RoomAmenityKey {
        RoomAmenityKey {
            room_id: self.room_id,
            amenity_id: self.amenity_id,
        }
    }
}

impl Submission for RoomAmenityForm {
    fn normalized(self) -> Self {
        self
    }

    fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl From<&RoomAmenity> for RoomAmenityForm {
    fn from(row: &RoomAmenity) -> Self {
        Self {
            room_id: row.room_id,
            amenity_id: row.amenity_id,
            version: row.version,
            csrf_token: String::new(),
        }
    }
}
