// Copyright 2025 Alexandre D. Díaz
use actix_web::{get, Error as AWError, HttpResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MessageResponse {
    pub message: String,
}

#[get("/")]
pub async fn route() -> Result<HttpResponse, AWError> {
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Hello from Ancestry Explorer Backend!".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn root_greets() {
        let app = test::init_service(App::new().service(route)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        assert_eq!(
            body,
            r#"{"message":"Hello from Ancestry Explorer Backend!"}"#.as_bytes()
        );
    }
}
