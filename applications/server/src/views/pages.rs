/// Stand-alone pages: home and error pages
use super::{escape, layout, Notice};
use axum::response::Html;

pub fn home(notices: &[Notice]) -> Html<String> {
    layout(
        "Home",
        notices,
        "<h1>Gigbook</h1>\n<p>Book artists into venues.</p>\n<ul>\
         <li><a href=\"/venues/create\">Post a venue</a></li>\
         <li><a href=\"/artists/create\">Post an artist</a></li>\
         <li><a href=\"/shows/create\">Post a show</a></li></ul>\n",
    )
}

pub fn not_found(message: &str) -> Html<String> {
    layout(
        "Not Found",
        &[],
        &format!("<h1>404 Not Found</h1>\n<p>{}</p>\n", escape(message)),
    )
}

pub fn unprocessable(message: &str) -> Html<String> {
    layout(
        "Invalid Submission",
        &[Notice::error(message)],
        "<h1>The submission could not be processed</h1>\n",
    )
}

pub fn server_error() -> Html<String> {
    layout(
        "Server Error",
        &[],
        "<h1>500 Internal Server Error</h1>\n\
         <p>Something went wrong. Please try again later.</p>\n",
    )
}
