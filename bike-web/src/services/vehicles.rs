//! # Vehicle Endpoints
//!
//! One function per endpoint, no client-side state.

use serde_json::Value;
use shared::error::{ApiError, Result};
use shared::query::VehicleQuery;
use shared::{BrandList, UploadImagesResponse, Vehicle, VehicleList, VehiclePayload};
use web_sys::{File, FormData};

use super::api;

pub async fn get_all(query: &VehicleQuery) -> Result<VehicleList> {
    api::get("/vehicles", &query.to_params()).await
}

/// Listings owned by the signed-in user.
pub async fn get_my_bikes() -> Result<VehicleList> {
    api::get("/vehicles/my-bikes/", &[]).await
}

pub async fn get_by_id(id: &str) -> Result<Vehicle> {
    api::get(&format!("/vehicles/{}", id), &[]).await
}

pub async fn create(payload: &VehiclePayload) -> Result<Vehicle> {
    api::post("/vehicles/", payload).await
}

pub async fn update(id: &str, payload: &VehiclePayload) -> Result<Vehicle> {
    api::put(&format!("/vehicles/{}", id), payload).await
}

pub async fn delete(id: &str) -> Result<Value> {
    api::delete(&format!("/vehicles/{}", id)).await
}

/// Upload photos as repeated `files` multipart fields.
pub async fn upload_images(id: &str, files: &[File]) -> Result<UploadImagesResponse> {
    let form = FormData::new().map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    for file in files {
        form.append_with_blob_and_filename("files", file, &file.name())
            .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    }
    log::info!("Uploading {} image(s) for vehicle {}", files.len(), id);
    api::post_multipart(&format!("/vehicles/{}/upload-images", id), form).await
}

pub async fn get_brands() -> Result<Vec<String>> {
    api::get::<BrandList>("/vehicles/brands/list", &[])
        .await
        .map(BrandList::into_names)
}
