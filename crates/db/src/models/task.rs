//! Task model and input DTOs.
//!
//! Tasks are always read with their category (if any) resolved and
//! inlined, so the public [`Task`] shape nests a full [`Category`].

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::types::{DbId, Timestamp};

use crate::models::category::Category;
use crate::models::double_option;

/// A task with its category resolved, as returned by every read path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub category_id: Option<DbId>,
    pub created_at: Timestamp,
    pub category: Option<Category>,
}

/// Flat row produced by the tasks-LEFT-JOIN-categories queries.
///
/// sqlx cannot decode an optional nested struct, so repositories fetch
/// this shape and convert via `From<TaskRow>`.
#[derive(Debug, FromRow)]
pub(crate) struct TaskRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub category_id: Option<DbId>,
    pub created_at: Timestamp,
    pub category_name: Option<String>,
    pub category_description: Option<String>,
    pub category_color: Option<String>,
    pub category_created_at: Option<Timestamp>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        let category = match (
            row.category_id,
            row.category_name,
            row.category_description,
            row.category_color,
            row.category_created_at,
        ) {
            (Some(id), Some(name), Some(description), Some(color), Some(created_at)) => {
                Some(Category {
                    id,
                    name,
                    description,
                    color,
                    created_at,
                })
            }
            _ => None,
        };

        Task {
            id: row.id,
            title: row.title,
            description: row.description,
            completed: row.completed,
            category_id: row.category_id,
            created_at: row.created_at,
            category,
        }
    }
}

/// DTO for creating a new task. Unknown fields in the request body are
/// rejected. Tasks are always created pending.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
    pub category_id: Option<DbId>,
}

/// Patch DTO for a task. Absent fields are left unchanged.
///
/// `category_id` is double-optional: absent leaves the reference alone,
/// an explicit `null` clears it, and a value re-points it (after the
/// handler has confirmed the category exists).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<DbId>>,
}
