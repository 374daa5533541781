use super::{
    checkbox, definition_list, delete_confirmation, escape, form, hidden, layout, link,
    number_input, row_actions, select, table, FormErrors,
};
use crate::models::{Entity, Hotel, HotelRoom, HotelRoomForm, HotelRoomKey, Room};

const BASE: &str = "/HotelRooms";

pub fn key_query(key: HotelRoomKey) -> String {
    format!("?hotelid={}&roomnumber={}", key.hotel_id, key.room_number)
}

pub fn index(rows: &[HotelRoom]) -> String {
    let cells = rows
        .iter()
        .map(|hr| {
            vec![
                escape(&hr.hotel_name),
                hr.room_number.to_string(),
                escape(&hr.room_name),
                format!("{:.2}", hr.rate),
                if hr.pet_friendly { "Yes" } else { "No" }.to_string(),
                row_actions(BASE, &key_query(hr.key())),
            ]
        })
        .collect();

    let body = format!(
        "<p>{}</p>\n{}",
        link("/HotelRooms/Create", "Create New"),
        table(&["Hotel", "Number", "Room", "Rate", "Pet friendly"], cells)
    );
    layout("Hotel rooms", &body)
}

fn summary(row: &HotelRoom) -> String {
    definition_list(&[
        ("Hotel", row.hotel_name.clone()),
        ("Room number", row.room_number.to_string()),
        ("Room", row.room_name.clone()),
        ("Rate", format!("{:.2}", row.rate)),
        ("Pet friendly", if row.pet_friendly { "Yes" } else { "No" }.to_string()),
    ])
}

pub fn details(row: &HotelRoom) -> String {
    let body = format!(
        "{}<p>{} | {}</p>\n",
        summary(row),
        link(&format!("{BASE}/Edit{}", key_query(row.key())), "Edit"),
        link(BASE, "Back to List"),
    );
    layout("Hotel room details", &body)
}

fn fields(input: &HotelRoomForm, hotels: &[Hotel], rooms: &[Room], errors: &FormErrors) -> String {
    let placeholder = || ("0".to_string(), "-- select --".to_string());
    let hotel_options: Vec<(String, String)> = std::iter::once(placeholder())
        .chain(hotels.iter().map(|h| (h.id.to_string(), h.name.clone())))
        .collect();
    let room_options: Vec<(String, String)> = std::iter::once(placeholder())
        .chain(rooms.iter().map(|r| (r.id.to_string(), r.name.clone())))
        .collect();

    [
        select("hotel_id", "Hotel", &hotel_options, &input.hotel_id.to_string(), errors),
        number_input("room_number", "Room number", &input.room_number.to_string(), "1", errors),
        select("room_id", "Room", &room_options, &input.room_id.to_string(), errors),
        number_input("rate", "Rate", &input.rate.to_string(), "0.01", errors),
        checkbox("pet_friendly", "Pet friendly", input.pet_friendly),
    ]
    .concat()
}

pub fn create(
    input: &HotelRoomForm,
    hotels: &[Hotel],
    rooms: &[Room],
    errors: &FormErrors,
    csrf: &str,
) -> String {
    let body = format!(
        "{}<p>{}</p>\n",
        form(
            "/HotelRooms/Create",
            csrf,
            errors,
            &fields(input, hotels, rooms, errors),
            "Create"
        ),
        link(BASE, "Back to List")
    );
    layout("Create hotel room", &body)
}

pub fn edit(
    key: HotelRoomKey,
    input: &HotelRoomForm,
    hotels: &[Hotel],
    rooms: &[Room],
    errors: &FormErrors,
    csrf: &str,
) -> String {
    let fields = format!(
        "{}{}",
        hidden("version", input.version),
        fields(input, hotels, rooms, errors)
    );
    let body = format!(
        "{}<p>{}</p>\n",
        form(&format!("{BASE}/Edit{}", key_query(key)), csrf, errors, &fields, "Save"),
        link(BASE, "Back to List")
    );
    layout("Edit hotel room", &body)
}

pub fn delete(row: &HotelRoom, csrf: &str) -> String {
    let body = delete_confirmation(
        &format!("{BASE}/Delete{}", key_query(row.key())),
        csrf,
        &summary(row),
        BASE,
    );
    layout("Delete hotel room", &body)
}
