use crate::routes::AppState;
use axum::{extract::State, response::Html};
use contact_status::views::status::render_status_page;

// The page itself always answers 200; probe failures only change the markup.
pub async fn status_page(State(state): State<AppState>) -> Html<String> {
    let report = state.checker.run().await;
    Html(render_status_page(&report))
}
