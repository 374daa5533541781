//! Hotel Repository

use sqlx::sqlite::SqliteArguments;

use super::{push, RepoResult, Table};
use crate::models::{Hotel, HotelForm};

impl Table for Hotel {
    const TABLE: &'static str = "hotels";
    const SELECT: &'static str =
        "SELECT h.id, h.name, h.street_address, h.city, h.state, h.phone, h.version FROM hotels h";
    const ORDER_BY: &'static str = "h.id";
    const KEY_FILTER: &'static str = "h.id = ?";
    const KEY_COLUMNS: &'static str = "id = ?";
    const SEARCH_COLUMN: Option<&'static str> = Some("h.name");
    const INSERT: &'static str =
        "INSERT INTO hotels (name, street_address, city, state, phone) VALUES (?, ?, ?, ?, ?)";
    const ASSIGN: &'static str = "name = ?, street_address = ?, city = ?, state = ?, phone = ?";

    fn bind_key(key: i64, args: &mut SqliteArguments<'_>) -> RepoResult<()> {
        push(args, key)
    }

    fn bind_form(form: &HotelForm, args: &mut SqliteArguments<'_>) -> RepoResult<()> {
        push(args, form.name.clone())?;
        push(args, form.street_address.clone())?;
        push(args, form.city.clone())?;
        push(args, form.state.clone())?;
        push(args, form.phone.clone())
    }

    fn inserted_key(_: &HotelForm, rowid: i64) -> i64 {
        rowid
    }

    fn updated_key(key: i64, _: &HotelForm) -> i64 {
        key
    }
}
