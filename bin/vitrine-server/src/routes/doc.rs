use crate::routes::admin;
use crate::routes::health;
use crate::routes::public;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "vitrine-server",
    description = "Public site and admin API for the vitrine showcase backend",
    version = "0.1.0",
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(health::HealthApi::openapi());
    root.merge(public::api_docs());
    root.merge(admin::api_docs());
    root
}
