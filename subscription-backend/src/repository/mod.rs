// src/repository/mod.rs
pub mod subscription_gateway;
pub mod subscription_repository;

pub use subscription_gateway::SubscriptionGateway;
pub use subscription_repository::SubscriptionRepository;
