use crate::errors::AppError;
use crate::models::Dashboard;
use crate::service::load_dashboard;
use crate::state::AppState;
use crate::ui::INDEX_HTML;
use axum::{extract::State, response::Html, Json};

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn get_dashboard(State(state): State<AppState>) -> Result<Json<Dashboard>, AppError> {
    let dashboard = load_dashboard(&state.api, &state.defaults).await?;
    Ok(Json(dashboard))
}
