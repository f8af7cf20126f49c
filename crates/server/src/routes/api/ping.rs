// Copyright 2025 Alexandre D. Díaz
use actix_web::{get, Error as AWError, HttpResponse};

use crate::routes::common::MessageResponse;

#[get("/ping")]
pub async fn route() -> Result<HttpResponse, AWError> {
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "pong".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn ping_answers_pong() {
        let app = test::init_service(
            App::new().service(web::scope(super::super::PATH).service(super::route)),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/ping").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"message": "pong"}));
    }
}
