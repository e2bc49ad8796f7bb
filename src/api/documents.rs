//! Document Endpoints

use gloo_net::http::Request;

use super::read_json;
use crate::config::SiteConfig;
use crate::error::ApiResult;
use crate::models::{Document, DocumentsResponse};

pub async fn list_documents(config: &SiteConfig) -> ApiResult<Vec<Document>> {
    let response = Request::get(&config.url("documents")).send().await?;
    let body: DocumentsResponse = read_json(response).await?;
    Ok(body.documents)
}

/// Where the browser fetches a document's file
pub fn document_download_url(config: &SiteConfig, id: u32) -> String {
    config.url(&format!("documents/{}/download", id))
}
