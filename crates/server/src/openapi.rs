use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillaDoc {
    pub id: i32,
    pub name: String,
    pub details: String,
    pub rate: f64,
    pub occupancy: i32,
    pub sqft: i32,
    pub image_url: String,
    pub amenity: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillaCreateDoc {
    /// 1 to 30 characters, unique ignoring case
    pub name: String,
    pub details: Option<String>,
    pub rate: f64,
    pub occupancy: Option<i32>,
    pub sqft: Option<i32>,
    pub image_url: Option<String>,
    pub amenity: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillaUpdateDoc {
    /// Must equal the id in the path
    pub id: i32,
    pub name: String,
    pub details: Option<String>,
    pub rate: f64,
    pub occupancy: i32,
    pub sqft: i32,
    pub image_url: String,
    pub amenity: Option<String>,
}

/// One RFC 6902 operation; paths name a villa property, e.g. `/name`.
#[derive(Serialize, ToSchema)]
pub struct PatchOperationDoc {
    /// add | remove | replace | move | copy | test
    pub op: String,
    pub path: String,
    pub from: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub value: Option<serde_json::Value>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::villas::list,
        crate::routes::villas::get,
        crate::routes::villas::create,
        crate::routes::villas::update,
        crate::routes::villas::patch,
        crate::routes::villas::delete,
    ),
    components(
        schemas(
            HealthResponse,
            VillaDoc,
            VillaCreateDoc,
            VillaUpdateDoc,
            PatchOperationDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "villa")
    )
)]
pub struct ApiDoc;
