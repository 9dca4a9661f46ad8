use crate::probe::{CheckResult, StatusReport};
use crate::views::layout::render_layout;

pub fn render_status_page(report: &StatusReport) -> String {
    let health_url = format!("{}/health", report.base_url);
    let token_url = format!("{}/form-token.js", report.base_url);
    let cors_url = format!("{}/f/contact", report.base_url);

    let content = format!(
        r#"<h1>🔍 Contact Form Status</h1>
        {health_row}
        {token_row}
        {cors_row}
        <div class="timestamp">Last checked: {checked_at}</div>
        <button onclick="location.reload()">Refresh Status</button>
        <div class="details">
            <strong>Service Details:</strong><br>
            {health_response}<strong>Service URLs:</strong><br>
            <code>{health_url}</code><br>
            <code>{token_url}</code><br>
            <code>{cors_url}</code>
        </div>"#,
        health_row = render_status_row("Health Check", "Healthy", &report.health),
        token_row = render_status_row("Token Endpoint", "Working", &report.token),
        cors_row = render_status_row("CORS Configuration", "Configured", &report.cors),
        checked_at = html_escape::encode_text(&report.checked_at),
        health_response = render_health_response(&report.health),
        health_url = html_escape::encode_text(&health_url),
        token_url = html_escape::encode_text(&token_url),
        cors_url = html_escape::encode_text(&cors_url),
    );

    render_layout("Contact Form Status", &content)
}

fn render_status_row(label: &str, ok_label: &str, result: &CheckResult) -> String {
    let row_class = if result.success {
        "status-healthy"
    } else {
        "status-error"
    };
    let state = if result.success {
        format!("✅ {ok_label}")
    } else {
        match result.status {
            Some(code) => format!("❌ Error: {code}"),
            None => "❌ Error".to_string(),
        }
    };

    format!(
        r#"<div class="status-item {row_class}">
            <span>{label}</span>
            <span>{state}</span>
        </div>"#,
        row_class = row_class,
        label = html_escape::encode_text(label),
        state = state,
    )
}

// The raw health body is only shown when that check succeeded.
fn render_health_response(health: &CheckResult) -> String {
    if !health.success {
        return String::new();
    }
    let body = health.body.as_deref().unwrap_or_default();
    format!(
        "Health Response: <code>{}</code><br>\n            ",
        html_escape::encode_text(body),
    )
}
