use serde_json::{Map, Value};
use log::{info, warn, error};

fn event_line(event: &str, key: &str, message: &str) -> Value {
    let mut line = Map::new();
    line.insert("event".to_string(), Value::from(event));
    line.insert(key.to_string(), Value::from(message));
    Value::Object(line)
}

/// Logs an informational event to CloudWatch in JSON format.
pub fn log_info(event: &str, message: &str) {
    info!("{}", event_line(event, "message", message));
}

pub fn log_warn(event: &str, message: &str) {
    warn!("{}", event_line(event, "message", message));
}

/// Logs an error event to CloudWatch in JSON format.
pub fn log_error(event: &str, error_message: &str) {
    error!("{}", event_line(event, "error", error_message));
}
