pub mod connection;
pub mod job_role_repository;
#[cfg(test)]
pub mod memory;
pub mod migrations;
pub mod models;

pub use job_role_repository::PgJobRoleRepository;
