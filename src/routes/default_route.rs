use actix_web::{get, HttpResponse};
use askama::Template;

use super::render_html;

#[derive(Template, Default)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub seed: String,
    pub message: Option<String>,
}

#[get("/")]
pub async fn default() -> HttpResponse {
    render_html(IndexTemplate::default())
}

#[get("/health_check")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
