//! Compile-time HTML templates, rendered from `templates/`.

use askama::Template;

use crate::pages::models::ApiInfo;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

#[derive(Template)]
#[template(path = "api.html")]
pub struct ApiTemplate<'a> {
    pub api_info: &'a ApiInfo,
}

#[derive(Template)]
#[template(path = "auth.html")]
pub struct AuthTemplate<'a> {
    pub endpoints: &'a [(&'static str, &'static str)],
}

#[derive(Template)]
#[template(path = "package_form.html")]
pub struct PackageFormTemplate;
