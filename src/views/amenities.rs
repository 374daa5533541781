use super::{
    definition_list, delete_confirmation, escape, form, hidden, layout, link, row_actions,
    search_box, table, text_input, FormErrors,
};
use crate::models::{Amenity, AmenityForm};

const BASE: &str = "/Amenities";

pub fn index(amenities: &[Amenity], search: Option<&str>) -> String {
    let rows = amenities
        .iter()
        .map(|a| vec![escape(&a.name), row_actions(BASE, &format!("/{}", a.id))])
        .collect();

    let body = format!(
        "<p>{}</p>\n{}{}",
        link("/Amenities/Create", "Create New"),
        search_box(BASE, search),
        table(&["Name"], rows)
    );
    layout("Amenities", &body)
}

pub fn details(amenity: &Amenity) -> String {
    let body = format!(
        "{}<p>{} | {}</p>\n",
        definition_list(&[("Name", amenity.name.clone())]),
        link(&format!("{BASE}/Edit/{}", amenity.id), "Edit"),
        link(BASE, "Back to List"),
    );
    layout("Amenity details", &body)
}

pub fn create(input: &AmenityForm, errors: &FormErrors, csrf: &str) -> String {
    let fields = text_input("name", "Name", &input.name, errors);
    let body = format!(
        "{}<p>{}</p>\n",
        form("/Amenities/Create", csrf, errors, &fields, "Create"),
        link(BASE, "Back to List")
    );
    layout("Create amenity", &body)
}

pub fn edit(id: i64, input: &AmenityForm, errors: &FormErrors, csrf: &str) -> String {
    let fields = format!(
        "{}{}{}",
        hidden("id", id),
        hidden("version", input.version),
        text_input("name", "Name", &input.name, errors)
    );
    let body = format!(
        "{}<p>{}</p>\n",
        form(&format!("{BASE}/Edit/{id}"), csrf, errors, &fields, "Save"),
        link(BASE, "Back to List")
    );
    layout("Edit amenity", &body)
}

pub fn delete(amenity: &Amenity, csrf: &str) -> String {
    let body = delete_confirmation(
        &format!("{BASE}/Delete/{}", amenity.id),
        csrf,
        &definition_list(&[("Name", amenity.name.clone())]),
        BASE,
    );
    layout("Delete amenity", &body)
}
