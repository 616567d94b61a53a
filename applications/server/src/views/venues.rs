/// Venue pages
use super::{escape, format_datetime, image, layout, search_box, widgets, Notice};
use crate::forms::{VenueFormValues, GENRES, STATES};
use axum::response::Html;
use gigbook_core::{SearchResults, ShowWithArtist, Venue, VenueArea, VenueDetail};
use std::fmt::Write;

/// Venues grouped by city and state
pub fn list(areas: &[VenueArea], notices: &[Notice]) -> Html<String> {
    let mut body = search_box("/venues/search", "");
    body.push_str("<h1>Venues</h1>\n");

    for area in areas {
        let _ = writeln!(
            body,
            "<h3>{}, {}</h3>\n<ul class=\"items\">",
            escape(&area.city),
            escape(&area.state)
        );
        for venue in &area.venues {
            let _ = writeln!(
                body,
                "<li><a href=\"/venues/{}\">{}</a> <small>{} upcoming shows</small></li>",
                venue.id,
                escape(&venue.name),
                venue.num_upcoming_shows
            );
        }
        body.push_str("</ul>\n");
    }

    layout("Venues", notices, &body)
}

pub fn search(results: &SearchResults<Venue>, term: &str, notices: &[Notice]) -> Html<String> {
    let mut body = search_box("/venues/search", term);
    let _ = writeln!(
        body,
        "<h3>Number of search results for \"{}\": {}</h3>\n<ul class=\"items\">",
        escape(term),
        results.count
    );
    for venue in &results.data {
        let _ = writeln!(
            body,
            "<li><a href=\"/venues/{}\">{}</a></li>",
            venue.id,
            escape(&venue.name)
        );
    }
    body.push_str("</ul>\n");

    layout("Venue Search", notices, &body)
}

/// Detail page; `notices` report the request that redirected here
pub fn detail(detail: &VenueDetail, notices: &[Notice]) -> Html<String> {
    let venue = &detail.venue;
    let mut body = String::new();

    let _ = writeln!(
        body,
        "<h1>{}</h1>\n<p class=\"subtitle\">ID: {}</p>",
        escape(&venue.name),
        venue.id
    );
    write_genres(&mut body, &venue.genres);
    let _ = writeln!(
        body,
        "<p>{}, {}</p>\n<p>{}</p>",
        escape(&venue.city),
        escape(&venue.state),
        escape(&venue.address)
    );
    write_phone(&mut body, venue.phone.as_deref());
    write_link(&mut body, venue.website.as_deref());
    write_link(&mut body, venue.facebook_link.as_deref());

    if venue.seeking_talent {
        let _ = writeln!(
            body,
            "<div class=\"seeking\"><p>Currently seeking talent</p><p>{}</p></div>",
            escape(venue.seeking_description.as_deref().unwrap_or_default())
        );
    } else {
        body.push_str("<p class=\"not-seeking\">Not currently seeking talent</p>\n");
    }
    body.push_str(&image(venue.image_link.as_deref(), "Venue Image"));

    let _ = writeln!(
        body,
        "<p><a href=\"/venues/{}/edit\">Edit</a> \
         <button class=\"delete-btn\" data-kind=\"venues\" data-id=\"{}\">Delete</button></p>",
        venue.id, venue.id
    );

    write_shows(
        &mut body,
        "Upcoming",
        detail.upcoming_shows_count,
        &detail.upcoming_shows,
    );
    write_shows(
        &mut body,
        "Past",
        detail.past_shows_count,
        &detail.past_shows,
    );

    layout(&venue.name, notices, &body)
}

fn write_shows(body: &mut String, label: &str, count: usize, shows: &[ShowWithArtist]) {
    let noun = if count == 1 { "Show" } else { "Shows" };
    let _ = writeln!(body, "<section><h2>{count} {label} {noun}</h2>");
    for show in shows {
        let _ = writeln!(
            body,
            "<div class=\"show\">{}<h5><a href=\"/artists/{}\">{}</a></h5><h6>{}</h6></div>",
            image(show.artist_image_link.as_deref(), "Artist Image"),
            show.artist_id,
            escape(&show.artist_name),
            format_datetime(show.start_time)
        );
    }
    body.push_str("</section>\n");
}

pub(super) fn write_genres(body: &mut String, genres: &[String]) {
    body.push_str("<div class=\"genres\">");
    for genre in genres {
        let _ = write!(body, "<span class=\"genre\">{}</span>", escape(genre));
    }
    body.push_str("</div>\n");
}

pub(super) fn write_phone(body: &mut String, phone: Option<&str>) {
    let _ = writeln!(
        body,
        "<p>{}</p>",
        phone.map_or_else(|| "No Phone".to_string(), escape)
    );
}

pub(super) fn write_link(body: &mut String, link: Option<&str>) {
    if let Some(link) = link {
        let link = escape(link);
        let _ = writeln!(
            body,
            "<p><a href=\"{link}\" target=\"_blank\">{link}</a></p>"
        );
    }
}

/// Create or edit form. `action` is the POST target.
pub fn form(
    title: &str,
    action: &str,
    values: &VenueFormValues,
    notices: &[Notice],
) -> Html<String> {
    let mut body = String::new();
    let _ = writeln!(
        body,
        "<h1>{}</h1>\n<form method=\"post\" action=\"{}\" class=\"form\">",
        escape(title),
        escape(action)
    );

    widgets::text_input(&mut body, "name", "Name", &values.name);
    widgets::text_input(&mut body, "city", "City", &values.city);
    widgets::select(
        &mut body,
        "state",
        "State",
        STATES,
        std::slice::from_ref(&values.state),
        false,
    );
    widgets::text_input(&mut body, "address", "Address", &values.address);
    widgets::text_input(&mut body, "phone", "Phone", &values.phone);
    widgets::select(&mut body, "genres", "Genres", GENRES, &values.genres, true);
    widgets::text_input(&mut body, "image_link", "Image Link", &values.image_link);
    widgets::text_input(
        &mut body,
        "facebook_link",
        "Facebook Link",
        &values.facebook_link,
    );
    widgets::text_input(
        &mut body,
        "website_link",
        "Website Link",
        &values.website_link,
    );
    widgets::checkbox(
        &mut body,
        "seeking_talent",
        "Looking for Talent",
        values.seeking_talent,
    );
    widgets::text_input(
        &mut body,
        "seeking_description",
        "Seeking Description",
        &values.seeking_description,
    );

    body.push_str("<button type=\"submit\">Save</button>\n</form>\n");
    layout(title, notices, &body)
}
