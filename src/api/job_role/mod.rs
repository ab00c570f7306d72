pub mod controller;
pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use controller::JobRolesController;
pub use service::JobRolesService;
