use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{trim, Entity, Submission};

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub version: i64,
}

impl Entity for Hotel {
    type Key = i64;
    type Form = HotelForm;

    const NAME: &'static str = "hotel";

    fn key(&self) -> i64 {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct HotelForm {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Name is required (at most 100 characters)."))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Street address is required."))]
    pub street_address: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "City is required."))]
    pub city: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "State is required."))]
    pub state: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 32, message = "Phone is required (at most 32 characters)."))]
    pub phone: String,
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub csrf_token: String,
}

impl Submission for HotelForm {
    fn normalized(mut self) -> Self {
        self.name = trim(self.name);
        self.street_address = trim(self.street_address);
        self.city = trim(self.city);
        self.state = trim(self.state);
        self.phone = trim(self.phone);
        self
    }

    fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl From<&Hotel> for HotelForm {
    fn from(hotel: &Hotel) -> Self {
        Self {
            id: Some(hotel.id),
            name: hotel.name.clone(),
            street_address: hotel.street_address.clone(),
            city: hotel.city.clone(),
            state: hotel.state.clone(),
            phone: hotel.phone.clone(),
            version: hotel.version,
            csrf_token: String::new(),
        }
    }
}
