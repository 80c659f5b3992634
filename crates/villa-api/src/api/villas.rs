use axum::body::Bytes;
use axum::extract::{Extension, Path};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tracing::instrument;

use super::body::parse_optional;
use crate::clients::VillaClient;
use crate::model::VillaDto;
use crate::patch::PatchDocument;
use crate::villa::VillaError;

#[instrument(skip_all)]
pub async fn list_villas(
    Extension(client): Extension<VillaClient>,
) -> Result<Json<Vec<VillaDto>>, VillaError> {
    Ok(Json(client.list().await?))
}

#[instrument(skip(client))]
pub async fn get_villa(
    Extension(client): Extension<VillaClient>,
    Path(id): Path<i32>,
) -> Result<Json<VillaDto>, VillaError> {
    Ok(Json(client.get(id).await?))
}

#[instrument(skip_all)]
pub async fn create_villa(
    Extension(client): Extension<VillaClient>,
    body: Bytes,
) -> Result<impl IntoResponse, VillaError> {
    let dto = parse_optional::<VillaDto>(&body).map_err(VillaError::InvalidPayload)?;
    let created = client.create(dto).await?;
    let location = format!("/villas/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[instrument(skip(client, body))]
pub async fn update_villa(
    Extension(client): Extension<VillaClient>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<StatusCode, VillaError> {
    let dto = parse_optional::<VillaDto>(&body).map_err(VillaError::InvalidPayload)?;
    client.update(id, dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(client, body))]
pub async fn patch_villa(
    Extension(client): Extension<VillaClient>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<StatusCode, VillaError> {
    let document = parse_optional::<PatchDocument>(&body).map_err(VillaError::InvalidPayload)?;
    client.patch(id, document).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(client))]
pub async fn delete_villa(
    Extension(client): Extension<VillaClient>,
    Path(id): Path<i32>,
) -> Result<StatusCode, VillaError> {
    client.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
