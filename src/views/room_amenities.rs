use super::{
    definition_list, delete_confirmation, escape, form, hidden, layout, link, row_actions, select,
    table, FormErrors,
};
use crate::models::{Amenity, Entity, Room, RoomAmenity, RoomAmenityForm, RoomAmenityKey};

const BASE: &str = "/RoomAmenities";

pub fn key_query(key: RoomAmenityKey) -> String {
    format!("?roomid={}&amenityid={}", key.room_id, key.amenity_id)
}

pub fn index(rows: &[RoomAmenity]) -> String {
    let cells = rows
        .iter()
        .map(|ra| {
            vec![
                escape(&ra.room_name),
                escape(&ra.amenity_name),
                row_actions(BASE, &key_query(ra.key())),
            ]
        })
        .collect();

    let body = format!(
        "<p>{}</p>\n{}",
        link("/RoomAmenities/Create", "Create New"),
        table(&["Room", "Amenity"], cells)
    );
    layout("Room amenities", &body)
}

fn summary(row: &RoomAmenity) -> String {
    definition_list(&[
        ("Room", row.room_name.clone()),
        ("Amenity", row.amenity_name.clone()),
    ])
}

pub fn details(row: &RoomAmenity) -> String {
    let body = format!(
        "{}<p>{} | {}</p>\n",
        summary(row),
        link(&format!("{BASE}/Edit{}", key_query(row.key())), "Edit"),
        link(BASE, "Back to List"),
    );
    layout("Room amenity details", &body)
}

/// Full room and amenity tables feed the drop-downs.
fn fields(input: &RoomAmenityForm, rooms: &[Room], amenities: &[Amenity], errors: &FormErrors) -> String {
    let placeholder = || ("0".to_string(), "-- select --".to_string());
    let room_options: Vec<(String, String)> = std::iter::once(placeholder())
        .chain(rooms.iter().map(|r| (r.id.to_string(), r.name.clone())))
        .collect();
    let amenity_options: Vec<(String, String)> = std::iter::once(placeholder())
        .chain(amenities.iter().map(|a| (a.id.to_string(), a.name.clone())))
        .collect();

    format!(
        "{}{}",
        select("room_id", "Room", &room_options, &input.room_id.to_string(), errors),
        select("amenity_id", "Amenity", &amenity_options, &input.amenity_id.to_string(), errors),
    )
}

pub fn create(
    input: &RoomAmenityForm,
    rooms: &[Room],
    amenities: &[Amenity],
    errors: &FormErrors,
    csrf: &str,
) -> String {
    let body = format!(
        "{}<p>{}</p>\n",
        form(
            "/RoomAmenities/Create",
            csrf,
            errors,
            &fields(input, rooms, amenities, errors),
            "Create"
        ),
        link(BASE, "Back to List")
    );
    layout("Create room amenity", &body)
}

pub fn edit(
    key: RoomAmenityKey,
    input: &RoomAmenityForm,
    rooms: &[Room],
    amenities: &[Amenity],
    errors: &FormErrors,
    csrf: &str,
) -> String {
    let fields = format!(
        "{}{}",
        hidden("version", input.version),
        fields(input, rooms, amenities, errors)
    );
    let body = format!(
        "{}<p>{}</p>\n",
        form(&format!("{BASE}/Edit{}", key_query(key)), csrf, errors, &fields, "Save"),
        link(BASE, "Back to List")
    );
    layout("Edit room amenity", &body)
}

pub fn delete(row: &RoomAmenity, csrf: &str) -> String {
    let body = delete_confirmation(
        &format!("{BASE}/Delete{}", key_query(row.key())),
        csrf,
        &summary(row),
        BASE,
    );
    layout("Delete room amenity", &body)
}
