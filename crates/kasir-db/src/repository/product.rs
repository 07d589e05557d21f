//! # Product Repository
//!
//! Product master data. Checkout decrements stock through
//! [`LedgerRepository`](super::ledger::LedgerRepository); this repository
//! creates, reads, replaces and deletes products.
//!
//! A product referenced by a recorded transaction cannot be deleted: the
//! foreign key on `transaction_details.product_id` rejects it and the call
//! fails with `DbError::ForeignKeyViolation`.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use kasir_core::validation::{validate_product_name, validate_stock, validate_unit_price};
use kasir_core::{CoreError, NewProduct, Product};

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists all products ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products: Vec<Product> = sqlx::query_as(
            r#"
            SELECT id, name, unit_price, stock, created_at, updated_at
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Gets a product by ID.
    ///
    /// ## Returns
    /// * `Ok(Some(product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product: Option<Product> = sqlx::query_as(
            r#"
            SELECT id, name, unit_price, stock, created_at, updated_at
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product and returns it with its assigned id.
    ///
    /// ## Errors
    /// * `DbError::Rejected(CoreError::Validation)` - blank or over-long
    ///   name, negative price, negative stock
    pub async fn insert(&self, new: &NewProduct) -> DbResult<Product> {
        validate_new_product(new)?;

        let name = new.name.trim();
        let now = Utc::now();

        debug!(name = %name, stock = new.stock, "Inserting product");

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO products (name, unit_price, stock, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?4)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(new.unit_price)
        .bind(new.stock)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(Product {
            id,
            name: name.to_string(),
            unit_price: new.unit_price,
            stock: new.stock,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces a product's name, price and stock.
    ///
    /// ## Errors
    /// * `DbError::Rejected(CoreError::Validation)` - same rules as `insert`
    /// * `DbError::NotFound` - no product with this id
    pub async fn update(&self, id: i64, update: &NewProduct) -> DbResult<Product> {
        validate_new_product(update)?;

        debug!(product_id = id, stock = update.stock, "Updating product");

        let product: Option<Product> = sqlx::query_as(
            r#"
            UPDATE products
            SET name = ?1, unit_price = ?2, stock = ?3, updated_at = ?4
            WHERE id = ?5
            RETURNING id, name, unit_price, stock, created_at, updated_at
            "#,
        )
        .bind(update.name.trim())
        .bind(update.unit_price)
        .bind(update.stock)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        product.ok_or_else(|| DbError::not_found("Product", id))
    }

    /// Deletes a product that no transaction references.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no product with this id
    /// * `DbError::ForeignKeyViolation` - the product appears in the ledger
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        debug!(product_id = id, "Deleted product");
        Ok(())
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn validate_new_product(new: &NewProduct) -> Result<(), CoreError> {
    validate_product_name(&new.name)?;
    validate_unit_price(new.unit_price)?;
    validate_stock(new.stock)?;
    Ok(())
}
