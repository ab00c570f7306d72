use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::db::job_role_repository::JobRoleRepository;
use crate::db::models::JobRole;
use super::error::ServiceError;
use super::models::{JobRoleChanges, NewJobRole, RequestedId};

const INVALID_ID: &str = "Invalid job role ID";

/// Job role service: input validation and error classification
///
/// Every operation validates its input before touching the repository.
/// Raw repository failures become [`ServiceError::Database`]; errors the
/// service raises itself are returned unchanged.
pub struct JobRolesService {
    repository: Arc<dyn JobRoleRepository>,
}

impl JobRolesService {
    /// Create a new JobRolesService on top of a repository
    pub fn new(repository: Arc<dyn JobRoleRepository>) -> Self {
        Self { repository }
    }

    /// List all job roles, empty when none exist
    pub async fn find_all(&self) -> Result<Vec<JobRole>, ServiceError> {
        let job_roles = self
            .repository
            .find_all()
            .await
            .map_err(ServiceError::database("Failed to retrieve job roles"))?;

        info!("Service: Retrieved {} job roles", job_roles.len());
        Ok(job_roles)
    }

    /// Fetch a single job role
    ///
    /// # Returns
    /// - `Err(ServiceError::Validation)` - id is not a positive integer
    /// - `Err(ServiceError::NotFound)` - no row for the id
    /// - `Err(ServiceError::Database)` - storage failure
    pub async fn find_by_id(&self, id: impl Into<RequestedId>) -> Result<JobRole, ServiceError> {
        let id = validate_id(id.into())?;

        self.repository
            .find_by_id(id)
            .await
            .map_err(ServiceError::database("Failed to retrieve job role"))?
            .ok_or(ServiceError::NotFound(id))
    }

    /// Create a job role
    ///
    /// # Business Logic
    /// - Title must be non-blank after trimming
    /// - Description is optional
    pub async fn create(&self, new_job_role: NewJobRole) -> Result<JobRole, ServiceError> {
        validate_input(&new_job_role)?;
        info!("Service: Creating job role with title={}", new_job_role.title);

        let job_role = self
            .repository
            .create(&new_job_role)
            .await
            .map_err(ServiceError::database("Failed to create job role"))?;

        info!("Service: Job role created successfully with id={}", job_role.id);
        Ok(job_role)
    }

    /// Apply a partial update
    ///
    /// # Business Logic
    /// - Absent fields are left unchanged
    /// - A provided title must be non-blank; an explicit null title is rejected
    /// - A provided description may be empty; an explicit null clears it
    pub async fn update(
        &self,
        id: impl Into<RequestedId>,
        changes: JobRoleChanges,
    ) -> Result<JobRole, ServiceError> {
        let id = validate_id(id.into())?;
        validate_input(&changes)?;
        info!("Service: Updating job role id={}", id);

        let job_role = self
            .repository
            .update(id, &changes)
            .await
            .map_err(ServiceError::database("Failed to update job role"))?
            .ok_or(ServiceError::NotFound(id))?;

        info!("Service: Job role {} updated", job_role.id);
        Ok(job_role)
    }

    /// Hard-delete a job role
    pub async fn delete(&self, id: impl Into<RequestedId>) -> Result<(), ServiceError> {
        let id = validate_id(id.into())?;

        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(ServiceError::database("Failed to delete job role"))?;

        if !removed {
            return Err(ServiceError::NotFound(id));
        }

        info!("Service: Job role {} deleted", id);
        Ok(())
    }
}

fn validate_id(id: RequestedId) -> Result<i64, ServiceError> {
    id.to_key().ok_or_else(|| {
        warn!("Service: Rejected job role id {:?}", id);
        ServiceError::Validation(INVALID_ID.to_string())
    })
}

/// Runs `Validate` and reports the first failing message
fn validate_input<T: Validate>(input: &T) -> Result<(), ServiceError> {
    let Err(validation_errors) = input.validate() else {
        return Ok(());
    };

    let message = validation_errors
        .field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Validation error".to_string());

    warn!("Service: Validation failed: {}", message);
    Err(ServiceError::Validation(message))
}
