//! Gallery Endpoints

use gloo_net::http::Request;

use super::{ensure_ok, read_json};
use crate::config::SiteConfig;
use crate::error::ApiResult;
use crate::models::{GalleryItem, GalleryResponse, NewGalleryItem};

pub async fn list_gallery(config: &SiteConfig) -> ApiResult<Vec<GalleryItem>> {
    let response = Request::get(&config.url("gallery")).send().await?;
    let body: GalleryResponse = read_json(response).await?;
    tracing::debug!("[API] gallery: {} items", body.gallery_items.len());
    Ok(body.gallery_items)
}

pub async fn create_gallery_item(config: &SiteConfig, item: &NewGalleryItem) -> ApiResult<GalleryItem> {
    let response = Request::post(&config.url("gallery")).json(item)?.send().await?;
    read_json(response).await
}

pub async fn delete_gallery_item(config: &SiteConfig, id: u32) -> ApiResult<()> {
    let response = Request::delete(&config.url(&format!("gallery/{}", id))).send().await?;
    ensure_ok(response).await?;
    Ok(())
}
