use super::{
    definition_list, delete_confirmation, escape, form, hidden, layout, link, row_actions,
    search_box, table, text_input, FormErrors,
};
use crate::models::{Hotel, HotelForm, HotelRoom};

const BASE: &str = "/Hotels";

pub fn index(hotels: &[Hotel], search: Option<&str>) -> String {
    let rows = hotels
        .iter()
        .map(|h| {
            vec![
                escape(&h.name),
                escape(&h.city),
                escape(&h.state),
                escape(&h.phone),
                row_actions(BASE, &format!("/{}", h.id)),
            ]
        })
        .collect();

    let body = format!(
        "<p>{}</p>\n{}{}",
        link("/Hotels/Create", "Create New"),
        search_box(BASE, search),
        table(&["Name", "City", "State", "Phone"], rows)
    );
    layout("Hotels", &body)
}

fn summary(hotel: &Hotel) -> String {
    definition_list(&[
        ("Name", hotel.name.clone()),
        ("Street address", hotel.street_address.clone()),
        ("City", hotel.city.clone()),
        ("State", hotel.state.clone()),
        ("Phone", hotel.phone.clone()),
    ])
}

/// Hotel with its numbered rooms.
pub fn details(hotel: &Hotel, rooms: &[HotelRoom]) -> String {
    let rows = rooms
        .iter()
        .map(|r| {
            vec![
                r.room_number.to_string(),
                escape(&r.room_name),
                format!("{:.2}", r.rate),
                if r.pet_friendly { "Yes" } else { "No" }.to_string(),
            ]
        })
        .collect();

    let body = format!(
        "{}<h3>Rooms</h3>\n{}<p>{} | {} | {}</p>\n",
        summary(hotel),
        table(&["Number", "Room", "Rate", "Pet friendly"], rows),
        link(&format!("/HotelRooms/Create?hotelid={}", hotel.id), "Add room"),
        link(&format!("{BASE}/Edit/{}", hotel.id), "Edit"),
        link(BASE, "Back to List"),
    );
    layout("Hotel details", &body)
}

fn fields(input: &HotelForm, errors: &FormErrors) -> String {
    [
        text_input("name", "Name", &input.name, errors),
        text_input("street_address", "Street address", &input.street_address, errors),
        text_input("city", "City", &input.city, errors),
        text_input("state", "State", &input.state, errors),
        text_input("phone", "Phone", &input.phone, errors),
    ]
    .concat()
}

pub fn create(input: &HotelForm, errors: &FormErrors, csrf: &str) -> String {
    let body = format!(
        "{}<p>{}</p>\n",
        form("/Hotels/Create", csrf, errors, &fields(input, errors), "Create"),
        link(BASE, "Back to List")
    );
    layout("Create hotel", &body)
}

pub fn edit(id: i64, input: &HotelForm, errors: &FormErrors, csrf: &str) -> String {
    let fields = format!(
        "{}{}{}",
        hidden("id", id),
        hidden("version", input.version),
        fields(input, errors)
    );
    let body = format!(
        "{}<p>{}</p>\n",
        form(&format!("{BASE}/Edit/{id}"), csrf, errors, &fields, "Save"),
        link(BASE, "Back to List")
    );
    layout("Edit hotel", &body)
}

pub fn delete(hotel: &Hotel, csrf: &str) -> String {
    let body = delete_confirmation(
        &format!("{BASE}/Delete/{}", hotel.id),
        csrf,
        &summary(hotel),
        BASE,
    );
    layout("Delete hotel", &body)
}
