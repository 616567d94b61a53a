/// Show pages
use super::{escape, format_datetime, image, layout, widgets, Notice};
use crate::forms::ShowFormValues;
use axum::response::Html;
use gigbook_core::ShowListing;
use std::fmt::Write;

pub fn list(shows: &[ShowListing], notices: &[Notice]) -> Html<String> {
    let mut body = String::from("<h1>Shows</h1>\n<div class=\"shows\">\n");
    for show in shows {
        let _ = writeln!(
            body,
            "<div class=\"show\">{}<h4>{}</h4>\
             <h5><a href=\"/artists/{}\">{}</a></h5>\
             <p>playing at</p><h5><a href=\"/venues/{}\">{}</a></h5></div>",
            image(show.artist_image_link.as_deref(), "Artist Image"),
            format_datetime(show.start_time),
            show.artist_id,
            escape(&show.artist_name),
            show.venue_id,
            escape(&show.venue_name)
        );
    }
    body.push_str("</div>\n");

    layout("Shows", notices, &body)
}

pub fn form(values: &ShowFormValues, notices: &[Notice]) -> Html<String> {
    let mut body = String::from(
        "<h1>List a new show</h1>\n\
         <form method=\"post\" action=\"/shows/create\" class=\"form\">\n",
    );
    widgets::text_input(&mut body, "artist_id", "Artist ID", &values.artist_id);
    widgets::text_input(&mut body, "venue_id", "Venue ID", &values.venue_id);
    widgets::text_input(&mut body, "start_time", "Start Time", &values.start_time);
    body.push_str("<button type=\"submit\">Create Show</button>\n</form>\n");

    layout("New Show", notices, &body)
}
