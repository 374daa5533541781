use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use super::{Entity, Submission};

/// A hotel room is identified by its hotel and its number within that hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HotelRoomKey {
    pub hotel_id: i64,
    pub room_number: i64,
}

impl fmt::Display for HotelRoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hotel {} / room number {}", self.hotel_id, self.room_number)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct HotelRoom {
    pub hotel_id: i64,
    pub room_number: i64,
    pub room_id: i64,
    pub rate: f64,
    pub pet_friendly: bool,
    pub version: i64,
    pub hotel_name: String,
    pub room_name: String,
}

impl Entity for HotelRoom {
    type Key = HotelRoomKey;
    type Form = HotelRoomForm;

    const NAME: &'static str = "hotel room";

    fn key(&self) -> HotelRoomKey {
        HotelRoomKey {
            hotel_id: self.hotel_id,
            room_number: self.room_number,
        }
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "finite_rate"))]
pub struct HotelRoomForm {
    #[serde(default)]
    #[validate(range(min = 1, message = "Select a hotel."))]
    pub hotel_id: i64,
    #[serde(default)]
    #[validate(range(min = 1, message = "Room number must be positive."))]
    pub room_number: i64,
    #[serde(default)]
    #[validate(range(min = 1, message = "Select a room."))]
    pub room_id: i64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Rate cannot be negative."))]
    pub rate: f64,
    /// Unchecked checkboxes are absent from the body.
    #[serde(default)]
    pub pet_friendly: bool,
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub csrf_token: String,
}

fn finite_rate(form: &HotelRoomForm) -> Result<(), ValidationError> {
    if form.rate.is_finite() {
        Ok(())
    } else {
        let mut error = ValidationError::new("rate");
        error.message = Some("Rate must be a number.".into());
        Err(error)
    }
}

impl HotelRoomForm {
    pub fn key(&self) -> HotelRoomKey {
        HotelRoomKey {
            hotel_id: self.hotel_id,
            room_number: self.room_number,
        }
    }
}

impl Submission for HotelRoomForm {
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

impl From<&HotelRoom> for HotelRoomForm {
    fn from(row: &HotelRoom) -> Self {
        Self {
            hotel_id: row.hotel_id,
            room_number: row.room_number,
            room_id: row.room_id,
            rate: row.rate,
            pet_friendly: row.pet_friendly,
            version: row.version,
            csrf_token: String::new(),
        }
    }
}
