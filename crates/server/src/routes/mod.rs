// Copyright 2025 Alexandre D. Díaz
use actix_web::web;

pub mod api;
pub mod common;

/// Registers every HTTP route of the backend.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(common::route).service(
        web::scope(api::PATH).service(api::ping::route),
    );
}
