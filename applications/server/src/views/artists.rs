/// Artist pages
use super::venues::{write_genres, write_link, write_phone};
use super::{escape, format_datetime, image, layout, search_box, widgets, Notice};
use crate::forms::{ArtistFormValues, GENRES, STATES};
use axum::response::Html;
use gigbook_core::{Artist, ArtistDetail, ArtistSummary, SearchResults, ShowWithVenue};
use std::fmt::Write;

pub fn list(artists: &[ArtistSummary], notices: &[Notice]) -> Html<String> {
    let mut body = search_box("/artists/search", "");
    body.push_str("<h1>Artists</h1>\n<ul class=\"items\">\n");
    for artist in artists {
        let _ = writeln!(
            body,
            "<li><a href=\"/artists/{}\">{}</a></li>",
            artist.id,
            escape(&artist.name)
        );
    }
    body.push_str("</ul>\n");

    layout("Artists", notices, &body)
}

pub fn search(results: &SearchResults<Artist>, term: &str, notices: &[Notice]) -> Html<String> {
    let mut body = search_box("/artists/search", term);
    let _ = writeln!(
        body,
        "<h3>Number of search results for \"{}\": {}</h3>\n<ul class=\"items\">",
        escape(term),
        results.count
    );
    for artist in &results.data {
        let _ = writeln!(
            body,
            "<li><a href=\"/artists/{}\">{}</a></li>",
            artist.id,
            escape(&artist.name)
        );
    }
    body.push_str("</ul>\n");

    layout("Artist Search", notices, &body)
}

/// Detail page; `notices` report the request that redirected here
pub fn detail(detail: &ArtistDetail, notices: &[Notice]) -> Html<String> {
    let artist = &detail.artist;
    let mut body = String::new();

    let _ = writeln!(
        body,
        "<h1>{}</h1>\n<p class=\"subtitle\">ID: {}</p>",
        escape(&artist.name),
        artist.id
    );
    write_genres(&mut body, &artist.genres);
    let _ = writeln!(
        body,
        "<p>{}, {}</p>",
        escape(&artist.city),
        escape(&artist.state)
    );
    write_phone(&mut body, artist.phone.as_deref());
    write_link(&mut body, artist.website.as_deref());
    write_link(&mut body, artist.facebook_link.as_deref());

    if artist.seeking_venue {
        let _ = writeln!(
            body,
            "<div class=\"seeking\"><p>Currently seeking performance venues</p><p>{}</p></div>",
            escape(artist.seeking_description.as_deref().unwrap_or_default())
        );
    } else {
        body.push_str("<p class=\"not-seeking\">Not currently seeking performance venues</p>\n");
    }
    body.push_str(&image(artist.image_link.as_deref(), "Artist Image"));

    let _ = writeln!(
        body,
        "<p><a href=\"/artists/{}/edit\">Edit</a> \
         <button class=\"delete-btn\" data-kind=\"artists\" data-id=\"{}\">Delete</button></p>",
        artist.id, artist.id
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

    layout(&artist.name, notices, &body)
}

fn write_shows(body: &mut String, label: &str, count: usize, shows: &[ShowWithVenue]) {
    let noun = if count == 1 { "Show" } else { "Shows" };
    let _ = writeln!(body, "<section><h2>{count} {label} {noun}</h2>");
    for show in shows {
        let _ = writeln!(
            body,
            "<div class=\"show\">{}<h5><a href=\"/venues/{}\">{}</a></h5><h6>{}</h6></div>",
            image(show.venue_image_link.as_deref(), "Venue Image"),
            show.venue_id,
            escape(&show.venue_name),
            format_datetime(show.start_time)
        );
    }
    body.push_str("</section>\n");
}

pub fn form(
    title: &str,
    action: &str,
    values: &ArtistFormValues,
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
        "seeking_venue",
        "Looking for Venues",
        values.seeking_venue,
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
