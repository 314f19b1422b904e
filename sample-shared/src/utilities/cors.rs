use std::collections::BTreeSet;
use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
pub const EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
pub const MAX_AGE: &str = "Access-Control-Max-Age";

/// Headers every CORS-enabled route accepts, whatever else is configured.
const REQUIRED_HEADERS: [&str; 5] = [
    "Content-Type",
    "X-Amz-Date",
    "Authorization",
    "X-Api-Key",
    "X-Amz-Security-Token",
];

/// Declarative cross-origin policy attached to a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allow_origin: String,
    pub allow_headers: Vec<String>,
    pub expose_headers: Vec<String>,
    pub max_age: Option<u64>,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        CorsConfig {
            allow_origin: "*".to_string(),
            allow_headers: REQUIRED_HEADERS.iter().map(|h| h.to_string()).collect(),
            expose_headers: Vec::new(),
            max_age: None,
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    /// Sorted, de-duplicated union of the configured and required headers.
    pub fn allowed_headers(&self) -> String {
        let headers: BTreeSet<&str> = self.allow_headers.iter()
            .map(String::as_str)
            .chain(REQUIRED_HEADERS)
            .collect();
        headers.into_iter().collect::<Vec<_>>().join(",")
    }

    /// Browsers refuse credentialed responses under a wildcard origin.
    pub fn is_wildcard_with_credentials(&self) -> bool {
        self.allow_origin == "*" && self.allow_credentials
    }

    /// Headers attached to every response from a CORS-enabled route.
    pub fn access_control_headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            (ALLOW_ORIGIN, self.allow_origin.clone()),
            (ALLOW_HEADERS, self.allowed_headers()),
        ];
        if !self.expose_headers.is_empty() {
            headers.push((EXPOSE_HEADERS, self.expose_headers.join(",")));
        }
        if self.allow_credentials {
            headers.push((ALLOW_CREDENTIALS, "true".to_string()));
        }
        headers
    }

    /// Headers for an OPTIONS preflight answer.
    pub fn preflight_headers(&self, methods: &[&str]) -> Vec<(&'static str, String)> {
        let mut headers = self.access_control_headers();
        headers.push((ALLOW_METHODS, methods.join(",")));
        if let Some(max_age) = self.max_age {
            headers.push((MAX_AGE, max_age.to_string()));
        }
        headers
    }
}

/// Writes the given headers into `map`, skipping any that are not valid header text.
pub fn apply_headers(map: &mut HeaderMap, headers: Vec<(&'static str, String)>) {
    for (name, value) in headers {
        match (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(&value)) {
            (Ok(name), Ok(value)) => {
                map.insert(name, value);
            }
            _ => log::warn!("Skipping header {}: {}", name, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_permissive() {
        let cors = CorsConfig::default();
        let headers = cors.access_control_headers();

        assert!(headers.contains(&(ALLOW_ORIGIN, "*".to_string())));
        assert!(headers.contains(&(ALLOW_CREDENTIALS, "true".to_string())));
        assert!(headers.contains(&(
            ALLOW_HEADERS,
            "Authorization,Content-Type,X-Amz-Date,X-Amz-Security-Token,X-Api-Key".to_string()
        )));
        assert!(cors.is_wildcard_with_credentials());
    }

    #[test]
    fn custom_headers_are_merged_and_deduplicated() {
        let cors = CorsConfig {
            allow_headers: vec!["X-Request-Id".to_string(), "Content-Type".to_string()],
            ..CorsConfig::default()
        };
        assert_eq!(
            cors.allowed_headers(),
            "Authorization,Content-Type,X-Amz-Date,X-Amz-Security-Token,X-Api-Key,X-Request-Id"
        );
    }

    #[test]
    fn optional_headers_only_when_configured() {
        let cors = CorsConfig { allow_credentials: false, ..CorsConfig::default() };
        let names: Vec<&str> = cors.access_control_headers().into_iter().map(|(n, _)| n).collect();
        assert!(!names.contains(&ALLOW_CREDENTIALS));
        assert!(!names.contains(&EXPOSE_HEADERS));

        let cors = CorsConfig {
            expose_headers: vec!["X-Trace".to_string()],
            max_age: Some(600),
            ..CorsConfig::default()
        };
        let headers = cors.preflight_headers(&["GET", "OPTIONS"]);
        assert!(headers.contains(&(EXPOSE_HEADERS, "X-Trace".to_string())));
        assert!(headers.contains(&(ALLOW_METHODS, "GET,OPTIONS".to_string())));
        assert!(headers.contains(&(MAX_AGE, "600".to_string())));
    }

    #[test]
    fn apply_headers_writes_into_map() {
        let mut map = HeaderMap::new();
        apply_headers(&mut map, CorsConfig::default().preflight_headers(&["GET"]));

        assert_eq!(map.get("access-control-allow-origin").unwrap(), "*");
        assert_eq!(map.get("access-control-allow-methods").unwrap(), "GET");
        assert!(map.get("access-control-max-age").is_none());
    }
}
