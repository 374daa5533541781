//! Room Repository

use sqlx::sqlite::SqliteArguments;

use super::{push, RepoResult, Table};
use crate::models::{Room, RoomForm};

impl Table for Room {
    const TABLE: &'static str = "rooms";
    const SELECT: &'static str = "SELECT r.id, r.name, r.layout, r.version FROM rooms r";
    const ORDER_BY: &'static str = "r.id";
    const KEY_FILTER: &'static str = "r.id = ?";
    const KEY_COLUMNS: &'static str = "id = ?";
    const SEARCH_COLUMN: Option<&'static str> = Some("r.name");
    const INSERT: &'static str = "INSERT INTO rooms (name, layout) VALUES (?, ?)";
    const ASSIGN: &'static str = "name = ?, layout = ?";

    fn bind_key(key: i64, args: &mut SqliteArguments<'_>) -> RepoResult<()> {
        push(args, key)
    }

    fn bind_form(form: &RoomForm, args: &mut SqliteArguments<'_>) -> RepoResult<()> {
        push(args, form.name.clone())?;
        push(args, form.layout)
    }

    fn inserted_key(_: &RoomForm, rowid: i64) -> i64 {
        rowid
    }

    fn updated_key(key: i64, _: &RoomForm) -> i64 {
        key
    }
}
