pub mod health;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::applications;
use crate::auth::require_admin;
use crate::blog;
use crate::companies;
use crate::jobs;
use crate::masters;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health::health_handler))
        .route("/blog", get(blog::handlers::list_posts))
        .route("/company/:id", get(companies::handlers::get_company))
        .route("/educationMaster", get(masters::handlers::list_degrees))
        .route("/jobPositionMaster", get(masters::handlers::list_positions))
        .route("/jobs", get(jobs::handlers::list_jobs))
        .route("/jobs/:id", get(jobs::handlers::get_job))
        .route(
            "/applications",
            post(applications::handlers::submit_application),
        );

    // Back-office surface. Everything below requires the admin bearer key;
    // the check runs server-side in `require_admin`.
    let admin = Router::new()
        .route("/blog", post(blog::handlers::create_post))
        .route("/company", post(companies::handlers::create_company))
        .route("/educationMaster", post(masters::handlers::create_degree))
        .route(
            "/jobPositionMaster",
            post(masters::handlers::create_position),
        )
        .route("/jobs", post(jobs::handlers::create_job))
        .route(
            "/jobs/:id",
            put(jobs::handlers::update_job).delete(jobs::handlers::delete_job),
        )
        .route(
            "/jobs/with-applications",
            get(jobs::handlers::jobs_with_applications),
        )
        .route("/applications", get(applications::handlers::list_applications))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ));

    public.merge(admin).with_state(state)
}
