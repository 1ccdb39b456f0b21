use crate::types::LoadingResponse;
use crate::AppState;
use axum::extract::State;
use axum::response::Json;
use std::sync::Arc;

pub async fn status(State(state): State<Arc<AppState>>) -> Json<LoadingResponse> {
    Json(LoadingResponse {
        loading: state.loader.is_loading(),
    })
}

pub async fn on(State(state): State<Arc<AppState>>) -> Json<LoadingResponse> {
    state.loader.loading_state_on();
    status(State(state)).await
}

pub async fn off(State(state): State<Arc<AppState>>) -> Json<LoadingResponse> {
    state.loader.loading_state_off();
    status(State(state)).await
}
