use lambda_http::{service_fn, Error};
use sample_lambda::router::handle_lambda;
use sample_shared::utilities::config;
use sample_shared::utilities::logging::{log_info, log_warn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    std::panic::set_hook(Box::new(|info| {
        log::error!("Application panicked: {}", info);
    }));

    config::init();
    let settings = config::settings();
    log_info("startup", &format!("Starting {}", settings.app_name));
    if settings.cors.is_wildcard_with_credentials() {
        log_warn("cors", "Access-Control-Allow-Origin is '*' while credentials are allowed");
    }

    lambda_http::run(service_fn(handle_lambda)).await?;
    Ok(())
}
