//! Room Amenity Repository
//!
//! Rows are always read with the room and amenity names joined in.

use sqlx::sqlite::SqliteArguments;

use super::{push, RepoResult, Table};
use crate::models::{RoomAmenity, RoomAmenityForm, RoomAmenityKey};

impl Table for RoomAmenity {
    const TABLE: &'static str = "room_amenities";
    const SELECT: &'static str = "SELECT ra.room_id, ra.amenity_id, ra.version, \
         r.name AS room_name, a.name AS amenity_name \
         FROM room_amenities ra \
         JOIN rooms r ON r.id = ra.room_id \
         JOIN amenities a ON a.id = ra.amenity_id";
    const ORDER_BY: &'static str = "ra.rowid";
    const KEY_FILTER: &'static str = "ra.room_id = ? AND ra.amenity_id = ?";
    const KEY_COLUMNS: &'static str = "room_id = ? AND amenity_id = ?";
    const OWNER_COLUMN: Option<&'static str> = Some("ra.room_id");
    const INSERT: &'static str = "INSERT INTO room_amenities (room_id, amenity_id) VALUES (?, ?)";
    const ASSIGN: &'static str = "room_id = ?, amenity_id = ?";

    fn bind_key(key: RoomAmenityKey, args: &mut SqliteArguments<'_>) -> RepoResult<()> {
        push(args, key.room_id)?;
        push(args, key.amenity_id)
    }

    fn bind_form(form: &RoomAmenityForm, args: &mut SqliteArguments<'_>) -> RepoResult<()> {
        push(args, form.room_id)?;
        push(args, form.amenity_id)
    }

    fn inserted_key(form: &RoomAmenityForm, _: i64) -> RoomAmenityKey {
        form.key()
    }

    fn updated_key(_: RoomAmenityKey, form: &RoomAmenityForm) -> RoomAmenityKey {
        form.key()
    }
}
