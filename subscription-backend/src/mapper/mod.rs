// src/mapper/mod.rs
pub mod create_subscription_mapper;

pub use create_subscription_mapper::CreateSubscriptionMapper;
