//! Amenity Repository

use sqlx::sqlite::SqliteArguments;

use super::{push, RepoResult, Table};
use crate::models::{Amenity, AmenityForm};

impl Table for Amenity {
    const TABLE: &'static str = "amenities";
    const SELECT: &'static str = "SELECT a.id, a.name, a.version FROM amenities a";
    const ORDER_BY: &'static str = "a.id";
    const KEY_FILTER: &'static str = "a.id = ?";
    const KEY_COLUMNS: &'static str = "id = ?";
    const SEARCH_COLUMN: Option<&'static str> = Some("a.name");
    const INSERT: &'static str = "INSERT INTO amenities (name) VALUES (?)";
    const ASSIGN: &'static str = "name = ?";

    fn bind_key(key: i64, args: &mut SqliteArguments<'_>) -> RepoResult<()> {
        push(args, key)
    }

    fn bind_form(form: &AmenityForm, args: &mut SqliteArguments<'_>) -> RepoResult<()> {
        push(args, form.name.clone())
    }

    fn inserted_key(_: &AmenityForm, rowid: i64) -> i64 {
        rowid
    }

    fn updated_key(key: i64, _: &AmenityForm) -> i64 {
        key
    }
}
