use actix_web::{
    HttpRequest, HttpResponse, delete, get, post, put,
    web::{Data, Json, ServiceConfig, scope},
};

use super::controller::JobRolesController;
use super::models::{JobRoleChanges, NewJobRole};

#[get("")]
async fn list_job_roles(controller: Data<JobRolesController>) -> HttpResponse {
    controller.respond(controller.get_all_job_roles().await)
}

#[get("/{id}")]
async fn get_job_role(controller: Data<JobRolesController>, req: HttpRequest) -> HttpResponse {
    let id = req.match_info().get("id");
    controller.respond(controller.get_job_role_by_id(id).await)
}

#[post("")]
async fn create_job_role(
    controller: Data<JobRolesController>,
    body: Json<NewJobRole>,
) -> HttpResponse {
    controller.respond(controller.create_job_role(body.into_inner()).await)
}

#[put("/{id}")]
async fn update_job_role(
    controller: Data<JobRolesController>,
    req: HttpRequest,
    body: Json<JobRoleChanges>,
) -> HttpResponse {
    let id = req.match_info().get("id");
    controller.respond(controller.update_job_role(id, body.into_inner()).await)
}

#[delete("/{id}")]
async fn delete_job_role(controller: Data<JobRolesController>, req: HttpRequest) -> HttpResponse {
    let id = req.match_info().get("id");
    controller.respond(controller.delete_job_role(id).await)
}

pub fn job_role_config(config: &mut ServiceConfig) {
    config.service(
        scope("/job-roles")
            .service(list_job_roles)
            .service(create_job_role)
            .service(get_job_role)
            .service(update_job_role)
            .service(delete_job_role),
    );
}
