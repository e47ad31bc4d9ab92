// src/api/mod.rs
pub mod dto;
