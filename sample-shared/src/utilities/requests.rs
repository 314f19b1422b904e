use lambda_http::{Request, RequestExt};

/// Path the request was routed on, with any stage prefix (`/dev`, `/prod`, ...) removed.
pub fn resolve_path(event: &Request, stages: &[String]) -> String {
    let raw_path = event.raw_http_path();
    let raw_path = if raw_path.is_empty() { event.uri().path() } else { raw_path };
    strip_stage(raw_path, stages)
}

fn strip_stage(path: &str, stages: &[String]) -> String {
    let stripped = stages.iter()
        .find_map(|stage| {
            let rest = path.strip_prefix('/')?.strip_prefix(stage.as_str())?;
            (rest.is_empty() || rest.starts_with('/')).then_some(rest)
        })
        .unwrap_or(path);

    if stripped.is_empty() {
        "/".to_string()
    } else {
        stripped.to_string()
    }
}

/// Extracts the Origin header, if the caller sent one.
pub fn extract_origin(event: &Request) -> Option<&str> {
    event.headers()
        .get("Origin")
        .and_then(|header| header.to_str().ok())
}
