use actix_web::{web, HttpResponse, Responder};
use chrono::{Datelike, NaiveDate};
use log::{debug, error, info};
use serde_json::json;
use tera::Context;
use uuid::Uuid;

use crate::model::prompt::horoscope_messages;
use crate::model::GenerationParams;
use crate::web::error::HoroscopeError;
use crate::web::models::{HoroscopeRequest, HoroscopeResponse};
use crate::zodiac;
use crate::AppState;

// Index page handler
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    let context = Context::new();
    match data.tera.render("index.html", &context) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(e) => {
            error!("Template error: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Horoscope API endpoint
pub async fn generate_horoscope(
    data: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, HoroscopeError> {
    let request_id = Uuid::new_v4();

    match horoscope_for(&data, &body, request_id).await {
        Ok(reply) => Ok(HttpResponse::Ok()
            .content_type("application/json")
            .body(reply)),
        Err(e) => {
            if !e.is_client_error() {
                error!("[{}] An error occurred: {}", request_id, e);
            }
            Err(e)
        }
    }
}

/// Runs one request through decode, validation, sign lookup and the
/// completion call, returning the model's reply untouched.
async fn horoscope_for(
    data: &AppState,
    body: &[u8],
    request_id: Uuid,
) -> Result<String, HoroscopeError> {
    let request: HoroscopeRequest = serde_json::from_slice(body)?;
    let details = request.details()?;

    let dob = NaiveDate::parse_from_str(details.dob, "%Y-%m-%d").map_err(|source| {
        HoroscopeError::InvalidDate {
            input: details.dob.to_string(),
            source,
        }
    })?;
    let sign = zodiac::resolve(dob.day(), dob.month())?;

    debug!(
        "[{}] Horoscope request for {} born {} in {} ({})",
        request_id, details.name, details.dob, details.place_of_birth, sign
    );

    let messages = horoscope_messages(&details, sign);
    let reply = data
        .client
        .complete(&messages, &GenerationParams::default())
        .await?;

    if data.validate_output {
        serde_json::from_str::<HoroscopeResponse>(&reply)
            .map_err(HoroscopeError::InvalidModelOutput)?;
    }

    info!("[{}] Relaying {} byte reply", request_id, reply.len());
    Ok(reply)
}
