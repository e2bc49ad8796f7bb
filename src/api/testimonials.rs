//! Testimonial Endpoints

use gloo_net::http::Request;

use super::read_json;
use crate::config::SiteConfig;
use crate::error::ApiResult;
use crate::models::{Testimonial, TestimonialsResponse};

pub async fn list_testimonials(config: &SiteConfig) -> ApiResult<Vec<Testimonial>> {
    let response = Request::get(&config.url("testimonials")).send().await?;
    let body: TestimonialsResponse = read_json(response).await?;
    Ok(body.testimonials)
}
