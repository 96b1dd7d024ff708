//! Human-readable summary of the current limits.

use axum::{extract::State, response::Html};

use crate::app_state::AppState;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let s = state.limits().snapshot();

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Metrics Generator</title>
</head>
<body>
<h1>Metrics Generator</h1>
<ul>
<li>Request time duration: {min}s - {max}s</li>
<li>Generated Error percentage: {errors}%</li>
<li>Requests per hour: {rate}</li>
</ul>
<p>Update the values with a PUT to <code>/-/config/duration-interval</code>,
<code>/-/config/errors-percentage</code> or <code>/-/config/requests-hour</code>.
Metrics are exposed at <a href="/metrics">/metrics</a>.</p>
</body>
</html>
"#,
        min = s.min_duration,
        max = s.max_duration,
        errors = s.errors_percentage,
        rate = s.requests_hour,
    ))
}
