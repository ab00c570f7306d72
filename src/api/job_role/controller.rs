use actix_web::HttpResponse;

use crate::api::error::ApiError;
use crate::config::RuntimeMode;
use super::models::{JobRoleChanges, NewJobRole, RequestedId};
use super::service::JobRolesService;

/// Translates HTTP requests into service calls and service results into responses
pub struct JobRolesController {
    service: JobRolesService,
    mode: RuntimeMode,
}

impl JobRolesController {
    pub fn new(service: JobRolesService, mode: RuntimeMode) -> Self {
        Self { service, mode }
    }

    pub async fn get_all_job_roles(&self) -> Result<HttpResponse, ApiError> {
        let job_roles = self.service.find_all().await?;
        Ok(HttpResponse::Ok().json(job_roles))
    }

    pub async fn get_job_role_by_id(
        &self,
        id_param: Option<&str>,
    ) -> Result<HttpResponse, ApiError> {
        let id = parse_id_param(id_param)?;
        let job_role = self.service.find_by_id(id).await?;
        Ok(HttpResponse::Ok().json(job_role))
    }

    pub async fn create_job_role(
        &self,
        new_job_role: NewJobRole,
    ) -> Result<HttpResponse, ApiError> {
        let job_role = self.service.create(new_job_role).await?;
        Ok(HttpResponse::Created().json(job_role))
    }

    pub async fn update_job_role(
        &self,
        id_param: Option<&str>,
        changes: JobRoleChanges,
    ) -> Result<HttpResponse, ApiError> {
        let id = parse_id_param(id_param)?;
        let job_role = self.service.update(id, changes).await?;
        Ok(HttpResponse::Ok().json(job_role))
    }

    pub async fn delete_job_role(&self, id_param: Option<&str>) -> Result<HttpResponse, ApiError> {
        let id = parse_id_param(id_param)?;
        self.service.delete(id).await?;
        Ok(HttpResponse::NoContent().finish())
    }

    /// Collapse a controller result into the response sent to the client
    pub fn respond(&self, result: Result<HttpResponse, ApiError>) -> HttpResponse {
        result.unwrap_or_else(|err| err.render(self.mode))
    }
}

/// A missing id fails here; a malformed one is left for the service to reject
fn parse_id_param(id_param: Option<&str>) -> Result<RequestedId, ApiError> {
    id_param
        .filter(|raw| !raw.is_empty())
        .map(RequestedId::parse)
        .ok_or(ApiError::MissingParameter("ID"))
}
