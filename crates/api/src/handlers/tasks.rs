//! Handlers for task CRUD and the filtered reads.
//!
//! The one cross-store contract lives here: no task write may persist a
//! non-null `categoryId` without first confirming the category exists
//! via [`CategoryRepo::exists_by_id`]. A missing category is a
//! validation failure, never a silent null-out.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_core::validation::{validate_new_task, validate_task_patch};
use taskboard_db::models::task::{CreateTask, UpdateTask};
use taskboard_db::repositories::{CategoryRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// Confirm the referenced category exists before a task write.
async fn ensure_category_exists(state: &AppState, category_id: DbId) -> AppResult<()> {
    if CategoryRepo::exists_by_id(&state.pool, category_id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(format!(
            "Category with id {category_id} does not exist"
        ))))
    }
}

/// GET /tasks
///
/// List all tasks, newest first, category resolved.
pub async fn list_tasks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tasks = TaskRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// GET /tasks/completed
pub async fn list_completed(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tasks = TaskRepo::list_by_completed(&state.pool, true).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// GET /tasks/pending
pub async fn list_pending(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tasks = TaskRepo::list_by_completed(&state.pool, false).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// GET /tasks/category/{categoryId}
///
/// List tasks in one category. Unknown categories are a 404, matching
/// the category fetch endpoints.
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !CategoryRepo::exists_by_id(&state.pool, category_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }));
    }

    let tasks = TaskRepo::list_by_category(&state.pool, category_id).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// GET /tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id,
        }))?;

    Ok(Json(DataResponse { data: task }))
}

/// POST /tasks
///
/// Create a new task, pending by default.
pub async fn create_task(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTask>,
) -> AppResult<impl IntoResponse> {
    validate_new_task(&input.title).map_err(AppError::Fields)?;

    if let Some(category_id) = input.category_id {
        ensure_category_exists(&state, category_id).await?;
    }

    let task = TaskRepo::create(&state.pool, &input).await?;

    tracing::info!(
        task_id = task.id,
        title = %task.title,
        category_id = task.category_id,
        "Task created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: task })))
}

/// PUT /tasks/{id}
///
/// Apply a partial update to a task. Repointing the category reference
/// re-validates existence; an explicit `categoryId: null` clears it.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateTask>,
) -> AppResult<impl IntoResponse> {
    validate_task_patch(input.title.as_deref()).map_err(AppError::Fields)?;

    TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id,
        }))?;

    if let Some(Some(category_id)) = input.category_id {
        ensure_category_exists(&state, category_id).await?;
    }

    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id,
        }))?;

    tracing::info!(task_id = id, completed = task.completed, "Task updated");

    Ok(Json(DataResponse { data: task }))
}

/// DELETE /tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TaskRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id,
        }));
    }

    tracing::info!(task_id = id, "Task deleted");

    Ok(StatusCode::NO_CONTENT)
}
