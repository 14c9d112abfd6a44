//! Repository for the `tasks` table.
//!
//! Every read resolves the referenced category in the same query via a
//! LEFT JOIN, so callers always get the inlined shape.

use sqlx::PgPool;
use taskboard_core::types::DbId;

use crate::models::task::{CreateTask, Task, TaskRow, UpdateTask};

/// Shared SELECT head for all task reads: task columns plus the joined
/// (nullable) category columns.
const SELECT_TASKS: &str = "SELECT t.id, t.title, t.description, t.completed, t.category_id, t.created_at,
            c.name AS category_name, c.description AS category_description,
            c.color AS category_color, c.created_at AS category_created_at
     FROM tasks t
     LEFT JOIN categories c ON c.id = t.category_id";

/// Newest-first ordering shared by every list query.
const ORDER_NEWEST_FIRST: &str = "ORDER BY t.created_at DESC, t.id DESC";

/// Provides CRUD operations and the filtered reads for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// List all tasks, newest first, category resolved.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("{SELECT_TASKS} {ORDER_NEWEST_FIRST}");
        let rows = sqlx::query_as::<_, TaskRow>(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Task::from).collect())
    }

    /// Find a task by its ID, category resolved.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("{SELECT_TASKS} WHERE t.id = $1");
        let row = sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Task::from))
    }

    /// List tasks filtered by the completed flag, newest first.
    pub async fn list_by_completed(
        pool: &PgPool,
        completed: bool,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("{SELECT_TASKS} WHERE t.completed = $1 {ORDER_NEWEST_FIRST}");
        let rows = sqlx::query_as::<_, TaskRow>(&query)
            .bind(completed)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Task::from).collect())
    }

    /// List tasks referencing the given category, newest first. Callers
    /// are expected to have confirmed the category exists.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("{SELECT_TASKS} WHERE t.category_id = $1 {ORDER_NEWEST_FIRST}");
        let rows = sqlx::query_as::<_, TaskRow>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Task::from).collect())
    }

    /// Create a new task, returning the stored row with its category
    /// resolved. New tasks always start pending.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO tasks (title, description, completed, category_id)
             VALUES ($1, COALESCE($2, ''), FALSE, $3)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.category_id)
        .fetch_one(pool)
        .await?;

        // Re-select to pick up the joined category.
        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Apply a patch to a task, returning the merged row. Fields absent
    /// from the patch keep their stored value; an explicit `categoryId:
    /// null` clears the reference.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let set_category = input.category_id.is_some();
        let category_id = input.category_id.flatten();

        let updated: Option<DbId> = sqlx::query_scalar(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                completed = COALESCE($4, completed),
                category_id = CASE WHEN $5 THEN $6 ELSE category_id END
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.completed)
        .bind(set_category)
        .bind(category_id)
        .fetch_optional(pool)
        .await?;

        match updated {
            Some(id) => Self::find_by_id(pool, id).await,
            None => Ok(None),
        }
    }

    /// Delete a task by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
