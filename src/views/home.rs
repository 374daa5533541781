use super::{layout, link};

pub fn index() -> String {
    let sections = [
        ("/Hotels", "Hotels"),
        ("/Rooms", "Rooms"),
        ("/Amenities", "Amenities"),
        ("/HotelRooms", "Hotel rooms"),
        ("/RoomAmenities", "Room amenities"),
    ];
    let items: String = sections
        .iter()
        .map(|(href, text)| format!("<li>{}</li>\n", link(href, text)))
        .collect();
    layout("Async Inn back office", &format!("<ul>\n{items}</ul>\n"))
}
