use askama::Template;
use askama_web::WebTemplate;

use crate::domain::model::CobjRecord;

/// Renders `templates/homepage.html` with the fetched record list.
#[derive(Template, WebTemplate)]
#[template(path = "homepage.html")]
pub struct HomepageTemplate {
    pub title: &'static str,
    pub data: Vec<CobjRecord>,
}

/// Renders `templates/updates.html`, the static create/update form.
#[derive(Template, WebTemplate)]
#[template(path = "updates.html")]
pub struct UpdatesTemplate {
    pub title: &'static str,
}
