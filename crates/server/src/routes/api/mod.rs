// Copyright 2025 Alexandre D. Díaz
pub mod ping;

pub static PATH: &str = "/api";
