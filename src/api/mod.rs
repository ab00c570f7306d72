pub mod error;
pub mod health;
pub mod job_role;
pub mod validation;
