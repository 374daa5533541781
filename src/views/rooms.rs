use super::{
    definition_list, delete_confirmation, escape, form, hidden, layout, link, row_actions,
    search_box, select, table, text_input, FormErrors,
};
use crate::models::{Layout, Room, RoomAmenity, RoomForm};

const BASE: &str = "/Rooms";

pub fn index(rooms: &[Room], search: Option<&str>) -> String {
    let rows = rooms
        .iter()
        .map(|r| {
            vec![
                escape(&r.name),
                escape(r.layout.display_name()),
                row_actions(BASE, &format!("/{}", r.id)),
            ]
        })
        .collect();

    let body = format!(
        "<p>{}</p>\n{}{}",
        link("/Rooms/Create", "Create New"),
        search_box(BASE, search),
        table(&["Name", "Layout"], rows)
    );
    layout("Rooms", &body)
}

/// Room with the amenities it offers.
pub fn details(room: &Room, amenities: &[RoomAmenity]) -> String {
    let offered = if amenities.is_empty() {
        "<p>No amenities yet.</p>\n".to_string()
    } else {
        let items: String = amenities
            .iter()
            .map(|a| format!("<li>{}</li>\n", escape(&a.amenity_name)))
            .collect();
        format!("<ul>\n{items}</ul>\n")
    };

    let body = format!(
        "{}<h3>Amenities</h3>\n{offered}<p>{} | {} | {}</p>\n",
        definition_list(&[
            ("Name", room.name.clone()),
            ("Layout", room.layout.display_name().to_string()),
        ]),
        link(&format!("/RoomAmenities/Create?roomid={}", room.id), "Add amenity"),
        link(&format!("{BASE}/Edit/{}", room.id), "Edit"),
        link(BASE, "Back to List"),
    );
    layout("Room details", &body)
}

fn fields(input: &RoomForm, errors: &FormErrors) -> String {
    let layouts: Vec<(String, String)> = Layout::ALL
        .iter()
        .map(|l| (l.form_value().to_string(), l.display_name().to_string()))
        .collect();
    format!(
        "{}{}",
        text_input("name", "Name", &input.name, errors),
        select("layout", "Layout", &layouts, input.layout.form_value(), errors)
    )
}

pub fn create(input: &RoomForm, errors: &FormErrors, csrf: &str) -> String {
    let body = format!(
        "{}<p>{}</p>\n",
        form("/Rooms/Create", csrf, errors, &fields(input, errors), "Create"),
        link(BASE, "Back to List")
    );
    layout("Create room", &body)
}

pub fn edit(id: i64, input: &RoomForm, errors: &FormErrors, csrf: &str) -> String {
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
    layout("Edit room", &body)
}

pub fn delete(room: &Room, csrf: &str) -> String {
    let body = delete_confirmation(
        &format!("{BASE}/Delete/{}", room.id),
        csrf,
        &definition_list(&[
            ("Name", room.name.clone()),
            ("Layout", room.layout.display_name().to_string()),
        ]),
        BASE,
    );
    layout("Delete room", &body)
}
