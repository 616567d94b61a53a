//! HTML rendering
//!
//! Pages are assembled with `format!`/`write!` into one shared layout. Every
//! value that came from a user or the database goes through [`escape`].

pub mod artists;
pub mod pages;
pub mod shows;
pub mod venues;

use axum::response::Html;
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Kind of inline notice, mapped to a CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A one-off message rendered at the top of the responding page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "alert-success",
            NoticeKind::Error => "alert-danger",
        }
    }
}

/// Escape text for use in HTML bodies and attribute values
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Long form used on listing and detail pages, e.g. `Tue 05, 21, 2019 9:30PM`
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%a %m, %d, %Y %-I:%M%p").to_string()
}

/// Wrap a page body in the shared layout
pub fn layout(title: &str, notices: &[Notice], body: &str) -> Html<String> {
    let mut page = String::with_capacity(body.len() + 1024);
    let _ = write!(
        page,
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{} | Gigbook</title>\n</head>\n<body>\n<nav>\
         <a href=\"/\">Gigbook</a> \
         <a href=\"/venues\">Venues</a> \
         <a href=\"/artists\">Artists</a> \
         <a href=\"/shows\">Shows</a>\
         </nav>\n",
        escape(title)
    );

    for notice in notices {
        let _ = writeln!(
            page,
            "<div class=\"alert {}\" role=\"alert\">{}</div>",
            notice.css_class(),
            escape(&notice.message)
        );
    }

    page.push_str("<main>\n");
    page.push_str(body);
    page.push_str("</main>\n<script src=\"/static/js/delete-button.js\"></script>\n");
    page.push_str("</body>\n</html>\n");
    Html(page)
}

/// `<img>` tag, or nothing when the link is absent
fn image(link: Option<&str>, alt: &str) -> String {
    link.map_or_else(String::new, |src| {
        format!("<img src=\"{}\" alt=\"{}\">", escape(src), escape(alt))
    })
}

/// Shared search box, posting `search_term` to `action`
fn search_box(action: &str, term: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\" class=\"search\">\
         <input name=\"search_term\" value=\"{}\" placeholder=\"Find a name\">\
         <button type=\"submit\">Search</button></form>\n",
        escape(term)
    )
}

/// Form widgets shared by the venue and artist forms
mod widgets {
    use super::escape;
    use std::fmt::Write;

    pub fn text_input(out: &mut String, name: &str, label: &str, value: &str) {
        let _ = writeln!(
            out,
            "<label>{label} <input type=\"text\" name=\"{name}\" value=\"{}\"></label>",
            escape(value)
        );
    }

    pub fn select(
        out: &mut String,
        name: &str,
        label: &str,
        options: &[&str],
        selected: &[String],
        multiple: bool,
    ) {
        let multiple = if multiple { " multiple" } else { "" };
        let _ = write!(out, "<label>{label} <select name=\"{name}\"{multiple}>");
        for option in options {
            let mark = if selected.iter().any(|s| s == option) {
                " selected"
            } else {
                ""
            };
            let option = escape(option);
            let _ = write!(out, "<option value=\"{option}\"{mark}>{option}</option>");
        }
        out.push_str("</select></label>\n");
    }

    pub fn checkbox(out: &mut String, name: &str, label: &str, checked: bool) {
        let checked = if checked { " checked" } else { "" };
        let _ = writeln!(
            out,
            "<label><input type=\"checkbox\" name=\"{name}\" value=\"y\"{checked}> {label}</label>"
        );
    }
}
