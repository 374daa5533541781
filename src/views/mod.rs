//! Server-rendered HTML pages.
//!
//! Every value interpolated into markup goes through [`escape`].

pub mod amenities;
pub mod home;
pub mod hotel_rooms;
pub mod hotels;
pub mod room_amenities;
pub mod rooms;

use std::collections::BTreeMap;
use std::fmt::Write;

use actix_web::http::StatusCode;
use validator::ValidationErrors;

use crate::csrf::FIELD_NAME;

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps a page body in the shared chrome.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Async Inn</title>
</head>
<body>
<nav>
<a href="/">Async Inn</a> |
<a href="/Hotels">Hotels</a> |
<a href="/Rooms">Rooms</a> |
<a href="/Amenities">Amenities</a> |
<a href="/HotelRooms">Hotel rooms</a> |
<a href="/RoomAmenities">Room amenities</a>
</nav>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    layout(
        title,
        &format!(
            "<p class=\"error\">{}</p>\n<p><a href=\"/\">Back to the start page</a></p>",
            escape(message)
        ),
    )
}

/// Messages collected while binding a form, keyed by field name.
#[derive(Debug, Default, Clone)]
pub struct FormErrors {
    fields: BTreeMap<String, Vec<String>>,
    summary: Vec<String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut out = Self::new();
        for (field, list) in errors.field_errors() {
            for error in list.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid."));
                if field == "__all__" {
                    out.summary.push(message);
                } else {
                    out.fields.entry(field.to_string()).or_default().push(message);
                }
            }
        }
        out
    }

    /// A message that belongs to the form as a whole.
    pub fn with_summary(mut self, message: impl Into<String>) -> Self {
        self.summary.push(message.into());
        self
    }

    pub fn field(&self, name: &str) -> &[String] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    fn summary_html(&self) -> String {
        if self.summary.is_empty() {
            return String::new();
        }
        let mut out = String::from("<ul class=\"validation-summary\">\n");
        for message in &self.summary {
            let _ = writeln!(out, "<li>{}</li>", escape(message));
        }
        out.push_str("</ul>\n");
        out
    }

    fn field_html(&self, name: &str) -> String {
        self.field(name)
            .iter()
            .map(|m| format!(" <span class=\"field-error\">{}</span>", escape(m)))
            .collect()
    }
}

/// `<form>` posting to `action` with the anti-forgery field and version.
fn form(action: &str, csrf: &str, errors: &FormErrors, fields: &str, submit: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n{summary}\
         <input type=\"hidden\" name=\"{FIELD_NAME}\" value=\"{csrf}\">\n\
         {fields}<button type=\"submit\">{submit}</button>\n</form>\n",
        action = escape(action),
        summary = errors.summary_html(),
        csrf = escape(csrf),
        submit = escape(submit),
    )
}

fn hidden(name: &str, value: impl ToString) -> String {
    format!(
        "<input type=\"hidden\" name=\"{name}\" value=\"{}\">\n",
        escape(&value.to_string())
    )
}

fn text_input(name: &str, label: &str, value: &str, errors: &FormErrors) -> String {
    format!(
        "<p><label for=\"{name}\">{label}</label> \
         <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\">{errors}</p>\n",
        label = escape(label),
        value = escape(value),
        errors = errors.field_html(name),
    )
}

fn number_input(name: &str, label: &str, value: &str, step: &str, errors: &FormErrors) -> String {
    format!(
        "<p><label for=\"{name}\">{label}</label> \
         <input type=\"number\" id=\"{name}\" name=\"{name}\" value=\"{value}\" step=\"{step}\">{errors}</p>\n",
        label = escape(label),
        value = escape(value),
        errors = errors.field_html(name),
    )
}

fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        "<p><label><input type=\"checkbox\" name=\"{name}\" value=\"true\"{checked}> {label}</label></p>\n",
        checked = if checked { " checked" } else { "" },
        label = escape(label),
    )
}

/// Drop-down whose options are `(value, label)` pairs.
fn select(name: &str, label: &str, options: &[(String, String)], selected: &str, errors: &FormErrors) -> String {
    let mut out = format!(
        "<p><label for=\"{name}\">{label}</label> <select id=\"{name}\" name=\"{name}\">\n",
        label = escape(label)
    );
    for (value, text) in options {
        let _ = writeln!(
            out,
            "<option value=\"{}\"{}>{}</option>",
            escape(value),
            if value == selected { " selected" } else { "" },
            escape(text)
        );
    }
    let _ = writeln!(out, "</select>{}</p>", errors.field_html(name));
    out
}

/// `<dl>` of label/value rows; values are escaped here.
fn definition_list(rows: &[(&str, String)]) -> String {
    let mut out = String::from("<dl>\n");
    for (label, value) in rows {
        let _ = writeln!(out, "<dt>{}</dt><dd>{}</dd>", escape(label), escape(value));
    }
    out.push_str("</dl>\n");
    out
}

/// Table with pre-rendered cells; callers escape cell contents.
fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut out = String::from("<table>\n<thead><tr>");
    for header in headers {
        let _ = write!(out, "<th>{}</th>", escape(header));
    }
    out.push_str("<th></th></tr></thead>\n<tbody>\n");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{cell}</td>");
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

fn link(href: &str, text: &str) -> String {
    format!("<a href=\"{}\">{}</a>", escape(href), escape(text))
}

/// Details / Edit / Delete links for one row.
fn row_actions(base: &str, key_suffix: &str) -> String {
    [
        link(&format!("{base}/Edit{key_suffix}"), "Edit"),
        link(&format!("{base}/Details{key_suffix}"), "Details"),
        link(&format!("{base}/Delete{key_suffix}"), "Delete"),
    ]
    .join(" | ")
}

fn search_box(action: &str, search: Option<&str>) -> String {
    format!(
        "<form method=\"get\" action=\"{action}\">\n\
         <p>Find by name: <input type=\"text\" name=\"searchString\" value=\"{}\"> \
         <button type=\"submit\">Search</button> {}</p>\n</form>\n",
        escape(search.unwrap_or_default()),
        link(action, "Back to full list"),
    )
}

fn delete_confirmation(action: &str, csrf: &str, details: &str, back: &str) -> String {
    format!(
        "<h3>Are you sure you want to delete this?</h3>\n{details}{}<p>{}</p>\n",
        form(action, csrf, &FormErrors::new(), "", "Delete"),
        link(back, "Back to List"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn escape_neutralises_markup() {
        assert_eq!(
            escape(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#x27;y&#x27;&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn validation_messages_land_on_their_field() {
        let form = crate::models::AmenityForm::default();
        let errors = FormErrors::from_validation(&form.validate().unwrap_err());

        assert_eq!(errors.field("name").len(), 1);
        assert!(errors.summary.is_empty());
        assert_eq!(errors.summary_html(), "");
    }

    #[test]
    fn selected_option_is_marked() {
        let options = vec![("1".to_string(), "One".to_string()), ("2".to_string(), "Two".to_string())];
        let html = select("room_id", "Room", &options, "2", &FormErrors::new());

        assert!(html.contains("<option value=\"2\" selected>Two</option>"));
        assert!(html.contains("<option value=\"1\">One</option>"));
    }
}
