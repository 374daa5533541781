//! Domain records and the form submissions that create or change them.

use std::fmt;

use validator::Validate;

pub mod amenity;
pub mod hotel;
pub mod hotel_room;
pub mod room;
pub mod room_amenity;

pub use amenity::{Amenity, AmenityForm};
pub use hotel::{Hotel, HotelForm};
pub use hotel_room::{HotelRoom, HotelRoomForm, HotelRoomKey};
pub use room::{Layout, Room, RoomForm};
pub use room_amenity::{RoomAmenity, RoomAmenityForm, RoomAmenityKey};

/// A persisted record addressed by a key and guarded by a concurrency token.
///
/// `Key` is either a surrogate `i64` id or a composite pair; `Form` is the
/// submission that creates or replaces the record's editable fields.
pub trait Entity: Clone + Send + Sync + Unpin + 'static {
    type Key: Copy + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static;
    type Form: Submission + Send + Sync;

    /// Human readable singular name, used in messages.
    const NAME: &'static str;

    fn key(&self) -> Self::Key;

    /// Value of the concurrency token when the record was read.
    fn version(&self) -> i64;
}

/// A bound HTML form body.
pub trait Submission: Validate + Sized {
    /// Trims free-text fields so blank input fails the `required` checks.
    fn normalized(self) -> Self;

    /// Anti-forgery token echoed back by the form.
    fn csrf_token(&self) -> &str;

    /// Concurrency token the form was rendered with.
    fn version(&self) -> i64;
}

pub(crate) fn trim(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_owned()
    }
}
