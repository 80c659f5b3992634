use axum::body::Bytes;
use axum::extract::{Extension, Path};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tracing::instrument;

use super::body::parse_optional;
use super::envelope::ApiResponse;
use crate::clients::VillaNumberClient;
use crate::model::{VillaNumberCreateDto, VillaNumberDto, VillaNumberUpdateDto};
use crate::villa_number::VillaNumberError;

type Enveloped<T> = (StatusCode, Json<ApiResponse<T>>);

#[instrument(skip_all)]
pub async fn list_villa_numbers(
    Extension(client): Extension<VillaNumberClient>,
) -> Result<Enveloped<Vec<VillaNumberDto>>, VillaNumberError> {
    let numbers = client.list().await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(StatusCode::OK, numbers))))
}

#[instrument(skip(client))]
pub async fn get_villa_number(
    Extension(client): Extension<VillaNumberClient>,
    Path(id): Path<i32>,
) -> Result<Enveloped<VillaNumberDto>, VillaNumberError> {
    let number = client.get(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(StatusCode::OK, number))))
}

#[instrument(skip_all)]
pub async fn create_villa_number(
    Extension(client): Extension<VillaNumberClient>,
    body: Bytes,
) -> Result<impl IntoResponse, VillaNumberError> {
    let dto = parse_optional::<VillaNumberCreateDto>(&body)
        .map_err(VillaNumberError::InvalidPayload)?;
    let created = client.create(dto).await?;
    let location = format!("/villa-numbers/{}", created.villa_no);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::ok(StatusCode::CREATED, created)),
    ))
}

/// Answers 200 with a 204 status recorded inside the envelope.
#[instrument(skip(client, body))]
pub async fn update_villa_number(
    Extension(client): Extension<VillaNumberClient>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<Enveloped<()>, VillaNumberError> {
    let dto = parse_optional::<VillaNumberUpdateDto>(&body)
        .map_err(VillaNumberError::InvalidPayload)?;
    client.update(id, dto).await?;
    Ok((StatusCode::OK, Json(ApiResponse::empty(StatusCode::NO_CONTENT))))
}

/// Answers 200 with a 204 status recorded inside the envelope.
#[instrument(skip(client))]
pub async fn delete_villa_number(
    Extension(client): Extension<VillaNumberClient>,
    Path(id): Path<i32>,
) -> Result<Enveloped<()>, VillaNumberError> {
    client.delete(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::empty(StatusCode::NO_CONTENT))))
}
