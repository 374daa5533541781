//! Hotel Room Repository

use sqlx::sqlite::SqliteArguments;

use super::{push, RepoResult, Table};
use crate::models::{HotelRoom, HotelRoomForm, HotelRoomKey};

impl Table for HotelRoom {
    const TABLE: &'static str = "hotel_rooms";
    const SELECT: &'static str = "SELECT hr.hotel_id, hr.room_number, hr.room_id, hr.rate, \
         hr.pet_friendly, hr.version, h.name AS hotel_name, r.name AS room_name \
         FROM hotel_rooms hr \
         JOIN hotels h ON h.id = hr.hotel_id \
         JOIN rooms r ON r.id = hr.room_id";
    const ORDER_BY: &'static str = "hr.rowid";
    const KEY_FILTER: &'static str = "hr.hotel_id = ? AND hr.room_number = ?";
    const KEY_COLUMNS: &'static str = "hotel_id = ? AND room_number = ?";
    const OWNER_COLUMN: Option<&'static str> = Some("hr.hotel_id");
    const INSERT: &'static str = "INSERT INTO hotel_rooms (hotel_id, room_number, room_id, rate, pet_friendly) \
         VALUES (?, ?, ?, ?, ?)";
    const ASSIGN: &'static str =
        "hotel_id = ?, room_number = ?, room_id = ?, rate = ?, pet_friendly = ?";

    fn bind_key(key: HotelRoomKey, args: &mut SqliteArguments<'_>) -> RepoResult<()> {
        push(args, key.hotel_id)?;
        push(args, key.room_number)
    }

    fn bind_form(form: &HotelRoomForm, args: &mut SqliteArguments<'_>) -> RepoResult<()> {
        push(args, form.hotel_id)?;
        push(args, form.room_number)?;
        push(args, form.room_id)?;
        push(args, form.rate)?;
        push(args, form.pet_friendly)
    }

    fn inserted_key(form: &HotelRoomForm, _: i64) -> HotelRoomKey {
        form.key()
    }

    fn updated_key(_: HotelRoomKey, form: &HotelRoomForm) -> HotelRoomKey {
        form.key()
    }
}

#[cfg(test)]
mod tests {
    use crate::db::repository::test_support::store;
    use crate::db::{ListFilter, Repository, Store};
    use crate::models::{HotelForm, HotelRoomForm, RoomForm};

    #[actix_web::test]
    async fn hotel_rooms_list_under_their_hotel() {
        let store = store().await;
        let hotel = store
            .hotels()
            .create(&HotelForm {
                name: "Async Inn Seattle".into(),
                street_address: "123 Pike St".into(),
                city: "Seattle".into(),
                state: "WA".into(),
                phone: "206-555-0100".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        let room = store
            .rooms()
            .create(&RoomForm {
                name: "Restful Rainier".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        let created = store
            .hotel_rooms()
            .create(&HotelRoomForm {
                hotel_id: hotel.id,
                room_number: 101,
                room_id: room.id,
                rate: 129.5,
                pet_friendly: true,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.hotel_name, "Async Inn Seattle");
        assert_eq!(created.room_name, "Restful Rainier");
        assert!(created.pet_friendly);

        let listed = store
            .hotel_rooms()
            .list(&ListFilter::owned_by(hotel.id))
            .await
            .unwrap();
        assert_eq!(listed, vec![created]);

        let other = store
            .hotel_rooms()
            .list(&ListFilter::owned_by(hotel.id + 1))
            .await
            .unwrap();
        assert!(other.is_empty());
    }
}
