//! Storage layer - database entity, mapper, migrations, repository

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;
