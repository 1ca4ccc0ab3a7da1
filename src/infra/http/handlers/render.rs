use axum::Json;

use crate::domain::markup;
use crate::infra::http::models::{RenderRequest, RenderResponse};

pub async fn render_markup(Json(request): Json<RenderRequest>) -> Json<RenderResponse> {
    Json(RenderResponse {
        blocks: markup::render(&request.text),
    })
}
