//! Handlers for category CRUD.
//!
//! Name uniqueness is checked before every insert and before any rename
//! (case-sensitive exact match, excluding the row being updated). The
//! schema's unique constraint backstops racing creates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_core::validation::{validate_category_patch, validate_new_category};
use taskboard_db::models::category::{CreateCategory, UpdateCategory};
use taskboard_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /categories
///
/// List all categories, newest first.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /categories/{id}
///
/// Get a single category by ID.
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    Ok(Json(DataResponse { data: category }))
}

/// POST /categories
///
/// Create a new category. Fails if a category with the same name
/// already exists.
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    validate_new_category(&input.name, input.color.as_deref()).map_err(AppError::Fields)?;

    if CategoryRepo::find_by_name(&state.pool, &input.name)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "A category named \"{}\" already exists",
            input.name
        ))));
    }

    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        category_id = category.id,
        name = %category.name,
        "Category created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// PUT /categories/{id}
///
/// Apply a partial update to a category. A renamed category must not
/// collide with any other category's name.
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    validate_category_patch(input.name.as_deref(), input.color.as_deref())
        .map_err(AppError::Fields)?;

    CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    if let Some(ref name) = input.name {
        if let Some(existing) = CategoryRepo::find_by_name(&state.pool, name).await? {
            if existing.id != id {
                return Err(AppError::Core(CoreError::Conflict(format!(
                    "A category named \"{name}\" already exists"
                ))));
            }
        }
    }

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    tracing::info!(category_id = id, "Category updated");

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /categories/{id}
///
/// Delete a category. Tasks referencing it survive with their
/// reference cleared by the schema.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    tracing::info!(category_id = id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}
