//! # Category Repository
//!
//! Catalogue categories. Plain CRUD; nothing else in the schema references
//! a category, so deletes always succeed for an existing id.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use kasir_core::validation::{validate_category_name, validate_description};
use kasir_core::{Category, CoreError, NewCategory};

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Lists all categories ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Category>> {
        let categories: Vec<Category> = sqlx::query_as(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Gets a category by ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Category>> {
        let category: Option<Category> = sqlx::query_as(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM categories
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    /// Inserts a category and returns it with its assigned id.
    pub async fn insert(&self, new: &NewCategory) -> DbResult<Category> {
        validate_new_category(new)?;

        debug!(name = %new.name.trim(), "Inserting category");

        let category: Category = sqlx::query_as(
            r#"
            INSERT INTO categories (name, description, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?3)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(new.name.trim())
        .bind(new.description.trim())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    /// Replaces a category's name and description.
    ///
    /// ## Errors
    /// * `DbError::Rejected(CoreError::Validation)` - blank name, long description
    /// * `DbError::NotFound` - no category with this id
    pub async fn update(&self, id: i64, update: &NewCategory) -> DbResult<Category> {
        validate_new_category(update)?;

        let category: Option<Category> = sqlx::query_as(
            r#"
            UPDATE categories
            SET name = ?1, description = ?2, updated_at = ?3
            WHERE id = ?4
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(update.name.trim())
        .bind(update.description.trim())
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        category.ok_or_else(|| DbError::not_found("Category", id))
    }

    /// Deletes a category.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        Ok(())
    }

    /// Counts total categories (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn validate_new_category(new: &NewCategory) -> Result<(), CoreError> {
    validate_category_name(&new.name)?;
    validate_description(&new.description)?;
    Ok(())
}
