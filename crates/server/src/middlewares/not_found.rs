// Copyright Alexandre D. Díaz
use actix_web::{
    dev::ServiceResponse, middleware::ErrorHandlerResponse, HttpResponse, Result,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorDetail<'a> {
    detail: &'a str,
}

/// Error handler for a 404 Not Found error.
pub fn handler_fn<B>(svc_res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    let res = get_error_response(&svc_res, "Not Found");

    Ok(ErrorHandlerResponse::Response(ServiceResponse::new(
        svc_res.into_parts().0,
        res.map_into_right_body(),
    )))
}

/// Generic JSON error body, keeping the status code of the failed response.
fn get_error_response<B>(res: &ServiceResponse<B>, error: &str) -> HttpResponse {
    HttpResponse::build(res.status()).json(ErrorDetail { detail: error })
}
