use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use prometheus::Encoder;

use crate::metrics::REGISTRY;

pub async fn metrics_handler() -> Response {
    let encoder = prometheus::TextEncoder::new();

    let mut buffer = Vec::new();
    if let Err(error) = encoder.encode(&REGISTRY.gather(), &mut buffer) {
        log::error!("Could not encode custom metrics. Error: '{error}'.");
    };
    if let Err(error) = encoder.encode(&prometheus::gather(), &mut buffer) {
        log::error!("Could not encode prometheus metrics. Error: '{error}'.");
    };

    match String::from_utf8(buffer) {
        Ok(metrics) => (StatusCode::OK, metrics).into_response(),
        Err(error) => {
            log::error!("Metrics could not be from_utf8'd. Error: '{error}'.");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
