//! Team Endpoints

use gloo_net::http::Request;

use super::read_json;
use crate::config::SiteConfig;
use crate::error::ApiResult;
use crate::models::TeamMember;

/// Team comes back as a bare array, no envelope
pub async fn list_team(config: &SiteConfig) -> ApiResult<Vec<TeamMember>> {
    let response = Request::get(&config.url("team")).send().await?;
    read_json(response).await
}
