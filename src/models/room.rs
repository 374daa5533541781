use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{trim, Entity, Submission};

/// Floor plan of a room. Stored as its discriminant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type,
)]
#[repr(i32)]
pub enum Layout {
    #[default]
    Studio = 0,
    OneBedroom = 1,
    TwoBedroom = 2,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Studio, Layout::OneBedroom, Layout::TwoBedroom];

    pub fn display_name(self) -> &'static str {
        match self {
            Layout::Studio => "Studio",
            Layout::OneBedroom => "One bedroom",
            Layout::TwoBedroom => "Two bedroom",
        }
    }

    /// Value submitted by the layout `<select>`.
    pub fn form_value(self) -> &'static str {
        match self {
            Layout::Studio => "Studio",
            Layout::OneBedroom => "OneBedroom",
            Layout::TwoBedroom => "TwoBedroom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub layout: Layout,
    pub version: i64,
}

impl Entity for Room {
    type Key = i64;
    type Form = RoomForm;

    const NAME: &'static str = "room";

    fn key(&self) -> i64 {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RoomForm {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Name is required (at most 100 characters)."))]
    pub name: String,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub csrf_token: String,
}

impl Submission for RoomForm {
    fn normalized(mut self) -> Self {
        self.name = trim(self.name);
        self
    }

    fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl From<&Room> for RoomForm {
    fn from(room: &Room) -> Self {
        Self {
            id: Some(room.id),
            name: room.name.clone(),
            layout: room.layout,
            version: room.version,
            csrf_token: String::new(),
        }
    }
}
