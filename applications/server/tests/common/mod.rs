//! Common test utilities and fixtures
#![allow(dead_code)]

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use gigbook_server::{create_router, state::AppState};
use gigbook_storage::Database;
use std::{path::Path, sync::Arc};
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router over a migrated database in a temporary file
pub struct TestApp {
    pub router: Router,
    pub db: Arc<Database>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
        let db = Arc::new(Database::open(&db_url, 5).await?);

        let static_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
        let router = create_router(AppState::new(Arc::clone(&db)), &static_dir);

        Ok(Self {
            router,
            db,
            _temp_dir: temp_dir,
        })
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Method::GET, uri, None).await
    }

    /// POST an already url-encoded form body
    pub async fn post_form(&self, uri: &str, body: &str) -> Response<Body> {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn status(&self, uri: &str) -> StatusCode {
        self.get(uri).await.status()
    }

    /// Submit the venue create form, returning the rendered page
    pub async fn create_venue(&self, form: &str) -> String {
        body_text(self.post_form("/venues/create", form).await).await
    }

    /// Submit the artist create form, returning the rendered page
    pub async fn create_artist(&self, form: &str) -> String {
        body_text(self.post_form("/artists/create", form).await).await
    }

    /// DELETE and decode the `{"status": ...}` answer
    pub async fn delete_json(&self, uri: &str) -> serde_json::Value {
        body_json(self.delete(uri).await).await
    }

    async fn send(&self, method: Method, uri: &str, form: Option<String>) -> Response<Body> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match form {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body)),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Form fixtures, url-encoded
pub mod fixtures {
    pub const MUSICAL_HOP: &str = "name=The+Musical+Hop&city=San+Francisco&state=CA\
        &address=1015+Folsom+Street&phone=123-123-1234&genres=Jazz&genres=Reggae\
        &website_link=https%3A%2F%2Fwww.themusicalhop.com&seeking_talent=y\
        &seeking_description=We+are+on+the+lookout+for+a+local+artist";

    pub const PARK_SQUARE: &str = "name=Park+Square+Live+Music+%26+Coffee&city=San+Francisco\
        &state=CA&address=34+Whiskey+Moore+Ave&genres=Rock+n+Roll";

    pub const DUELING_PIANOS: &str = "name=The+Dueling+Pianos+Bar&city=New+York&state=NY\
        &address=335+Delancey+Street&genres=Classical";

    pub const GUNS_N_PETALS: &str =
        "name=Guns+N+Petals&city=San+Francisco&state=CA&genres=Rock+n+Roll&seeking_venue=y";

    pub const WILD_SAX: &str = "name=The+Wild+Sax+Band&city=San+Francisco&state=CA&genres=Jazz";
}
