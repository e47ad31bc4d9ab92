// src/lib.rs
pub mod api;
pub mod bootstrap;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod logging;
pub mod mapper;
pub mod repository;
pub mod service;
pub mod utils;
pub mod validator;

// Re-export commonly used types
pub use error::{AppError, AppResult};
pub use service::subscription_service::SubscriptionService;
