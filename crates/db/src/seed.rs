//! Starter data for fresh installations.

use sqlx::PgPool;

use crate::models::category::CreateCategory;
use crate::repositories::CategoryRepo;

/// Categories inserted into an empty database so the client has
/// something to offer in its category picker.
const DEFAULT_CATEGORIES: &[(&str, &str, &str)] = &[
    ("Personal", "Personal tasks", "#4CAF50"),
    ("Work", "Professional tasks", "#2196F3"),
    ("Study", "Learning tasks", "#FF9800"),
];

/// Seed the default categories if the table is empty. Returns the
/// number of categories inserted (zero when the table already has rows).
pub async fn seed_default_categories(pool: &PgPool) -> Result<usize, sqlx::Error> {
    if CategoryRepo::count(pool).await? > 0 {
        return Ok(0);
    }

    for (name, description, color) in DEFAULT_CATEGORIES {
        let input = CreateCategory {
            name: (*name).to_string(),
            description: Some((*description).to_string()),
            color: Some((*color).to_string()),
        };
        CategoryRepo::create(pool, &input).await?;
    }

    Ok(DEFAULT_CATEGORIES.len())
}
