use axum::{routing::get, Router};

use crate::state::AppState;

pub mod crud;
pub mod dto;
pub mod handlers;
pub mod model;

use model::{Partner, Project, Service, Testimonial};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/services", get(crud::list_all::<Service>))
        .route("/projects", get(handlers::list_projects))
        .route("/testimonials", get(crud::list_all::<Testimonial>))
        .route("/partners", get(crud::list_all::<Partner>))
        .nest("/admin/services", crud::admin_router::<Service>())
        .nest("/admin/projects", crud::admin_router::<Project>())
        .nest("/admin/testimonials", crud::admin_router::<Testimonial>())
        .nest("/admin/partners", crud::admin_router::<Partner>())
}
