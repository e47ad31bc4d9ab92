// src/domain/mod.rs
pub mod subscription;
pub mod subscription_model;
pub mod subscription_provider;
pub mod subscription_status;
