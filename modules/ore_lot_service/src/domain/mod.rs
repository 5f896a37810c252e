//! Domain layer - validation and the lot service

pub mod repository;
pub mod service;
pub mod validation;

pub use repository::OreLotRepository;
pub use service::Service;
