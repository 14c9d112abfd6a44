//! Route definitions for tasks, mounted at `/tasks`.
//!
//! The static segments (`/completed`, `/pending`, `/category/...`) must
//! stay distinct from the `/{id}` matcher; axum routes static paths
//! before parameters, so `completed` is never parsed as an id.
//!
//! ```text
//! GET    /                         list_tasks
//! POST   /                         create_task
//! GET    /completed                list_completed
//! GET    /pending                  list_pending
//! GET    /category/{categoryId}    list_by_category
//! GET    /{id}                     get_task
//! PUT    /{id}                     update_task
//! DELETE /{id}                     delete_task
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list_tasks).post(tasks::create_task))
        .route("/completed", get(tasks::list_completed))
        .route("/pending", get(tasks::list_pending))
        .route("/category/{category_id}", get(tasks::list_by_category))
        .route(
            "/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
}
