use sample_shared::models::status::StatusResponse;

pub fn handle() -> StatusResponse {
    StatusResponse::ok()
}
