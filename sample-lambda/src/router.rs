use http::StatusCode;
use lambda_http::{Body, Request, Response};
use sample_shared::utilities::config::{self, AppConfig};
use sample_shared::utilities::cors::apply_headers;
use sample_shared::utilities::logging::log_info;
use sample_shared::utilities::requests::{extract_origin, resolve_path};
use sample_shared::utilities::responses::{empty_response, error_response, success_response};
use crate::endpoints::root;

const GET: &str = "GET";
const OPTIONS: &str = "OPTIONS";
const ROOT_METHODS: [&str; 2] = [GET, OPTIONS];

pub async fn handle_lambda(event: Request) -> Result<Response<Body>, lambda_http::Error> {
    route(&event, config::settings())
}

/// Dispatches one request against `settings`.
pub fn route(event: &Request, settings: &AppConfig) -> Result<Response<Body>, lambda_http::Error> {
    let path = resolve_path(event, &settings.stages);
    log_info("request", &format!(
        "{} {} (app: {}, origin: {})",
        event.method(),
        path,
        settings.app_name,
        extract_origin(event).unwrap_or("-")
    ));

    match (event.method().as_str(), path.as_str()) {
        (GET, "/") => {
            let mut response = success_response(root::handle())?;
            apply_headers(response.headers_mut(), settings.cors.access_control_headers());
            Ok(response)
        }

        //CORS preflight
        (OPTIONS, "/") => {
            let mut response = empty_response(StatusCode::OK)?;
            apply_headers(response.headers_mut(), settings.cors.preflight_headers(&ROOT_METHODS));
            Ok(response)
        }

        (_, "/") => {
            let mut response = error_response("Method Not Allowed", StatusCode::METHOD_NOT_ALLOWED)?;
            apply_headers(response.headers_mut(), settings.cors.access_control_headers());
            apply_headers(response.headers_mut(), vec![("Allow", ROOT_METHODS.join(","))]);
            Ok(response)
        }

        //Not found
        _ => error_response("Not Found", StatusCode::NOT_FOUND),
    }
}
