use http::StatusCode;
use lambda_http::{Response, Body};
use serde::Serialize;
use crate::models::errors::ResponseError;
use crate::models::status::ErrorResponse;

pub fn success_response<T: Serialize>(data: T) -> Result<Response<Body>, lambda_http::Error> {
    response_with_code(data, StatusCode::OK)
}

pub fn error_response(message: &str, code: StatusCode) -> Result<Response<Body>, lambda_http::Error> {
    response_with_code(ErrorResponse::new(message), code)
}

pub fn response_with_code<T: Serialize>(data: T, code: StatusCode) -> Result<Response<Body>, lambda_http::Error> {
    Ok(json_response(&data, code)?)
}

/// Serializes `data` into a JSON response with the given status.
fn json_response<T: Serialize>(data: &T, code: StatusCode) -> Result<Response<Body>, ResponseError> {
    let body = serde_json::to_string(data)?;
    log::info!("Response Code:{}\nBody: {}", code, body);
    Response::builder()
        .status(code)
        .header("Content-Type", "application/json")
        .body(Body::Text(body))
        .map_err(|e| {
            log::error!("Failed to build response: {:?}", e);
            ResponseError::from(e)
        })
}

/// A bodiless response, used for preflight answers.
pub fn empty_response(code: StatusCode) -> Result<Response<Body>, lambda_http::Error> {
    let response = Response::builder()
        .status(code)
        .body(Body::Empty)
        .map_err(ResponseError::from)?;
    Ok(response)
}
