//! `GET /` status page.

use axum::{extract::State, response::Html};

use crate::http::server::AppState;

pub async fn status_page(State(state): State<AppState>) -> Html<String> {
    Html(render_status_page(state.upstream.model()))
}

pub fn render_status_page(model: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head><title>OpenAI Relay</title></head>
  <body>
    <h2>OpenAI Relay is Live ({model})</h2>
    <p>Send a POST request to /openai</p>
    <pre>{{
  "message": "Say hello OpenAI"
}}</pre>
  </body>
</html>
"#,
        model = escape_html(model)
    )
}

// The model string comes from the config file and is rendered on a public
// page; it must never inject markup.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
