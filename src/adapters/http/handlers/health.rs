use actix_web::HttpResponse;
use chrono::Utc;

use crate::adapters::http::dtos::HealthResponse;

/// GET /api/health
pub async fn health_handler() -> HttpResponse {
  HttpResponse::Ok().json(HealthResponse {
    message: "MovieApp API is running!".to_string(),
    timestamp: Utc::now(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{App, http::StatusCode, test, web};
  use chrono::DateTime;
  use serde_json::Value;

  #[actix_web::test]
  async fn test_health() {
    let app =
      test::init_service(App::new().route("/api/health", web::get().to(health_handler))).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "MovieApp API is running!");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
  }
}
