//! # Ledger Repository
//!
//! The atomic checkout, and read access to committed transactions.
//!
//! ## Checkout Transaction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     checkout(cart) - one SQLite tx                      │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │   │                                                                     │
//! │   ├── for each line, in cart order:                                    │
//! │   │     UPDATE products SET stock = stock - qty                        │
//! │   │       WHERE id = ? AND stock >= qty  RETURNING name, price        │
//! │   │     ├── row      → PricedLine (snapshot name + price)              │
//! │   │     └── no row   → product missing?  ProductNotFound               │
//! │   │                    else              InsufficientStock             │
//! │   │                                                                     │
//! │   ├── created_at = now (write lock already held)                       │
//! │   ├── UPDATE products SET updated_at   (each touched product)          │
//! │   ├── total = Σ subtotal                                               │
//! │   ├── INSERT transactions          RETURNING id                        │
//! │   ├── INSERT transaction_details   (one per line)                      │
//! │   │                                                                     │
//! │  COMMIT ─── any error before this point drops the tx → ROLLBACK        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The first statement of the transaction is a write, so SQLite takes the
//! write lock before any stock is read. A concurrent checkout blocks on
//! that lock (up to the busy timeout) and then sees the committed stock,
//! which makes the conditional decrement a true check-and-set.
//!
//! The timestamp is read only after that first write, so transactions that
//! commit later never carry an earlier `created_at` or `business_date`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::{Sqlite, SqlitePool};
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};
use kasir_core::{
    cart_total, Cart, CoreError, Money, PricedLine, Transaction, TransactionDetail,
};

/// Repository for the transaction ledger.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    pool: SqlitePool,
}

/// Product row returned by the guarded decrement.
#[derive(Debug, sqlx::FromRow)]
struct DecrementedProduct {
    name: String,
    unit_price: Money,
}

/// Product row read back when the guarded decrement matched nothing.
#[derive(Debug, sqlx::FromRow)]
struct StockSnapshot {
    name: String,
    stock: i64,
}

impl LedgerRepository {
    /// Creates a new LedgerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        LedgerRepository { pool }
    }

    /// Checks out a cart, stamping it once the write lock is held.
    pub async fn checkout(&self, cart: &Cart) -> DbResult<Transaction> {
        self.record(cart, None).await
    }

    /// Checks out a cart with a caller-chosen timestamp (seeding, imports).
    pub async fn checkout_at(&self, cart: &Cart, at: DateTime<Utc>) -> DbResult<Transaction> {
        self.record(cart, Some(at)).await
    }

    /// Runs the checkout transaction.
    ///
    /// All-or-nothing: on success every line's stock is decremented and the
    /// transaction plus its details are committed together; on any error
    /// nothing is visible.
    ///
    /// ## Errors
    /// * `DbError::Rejected(CoreError::ProductNotFound)` - unknown product id
    /// * `DbError::Rejected(CoreError::InsufficientStock)` - `available` is
    ///   the stock before this checkout
    /// * `DbError::Rejected(CoreError::InvalidCart)` - money overflow
    /// * `DbError::TransactionFailed` - commit failed
    /// * other `DbError` variants - storage failure
    async fn record(&self, cart: &Cart, stamp: Option<DateTime<Utc>>) -> DbResult<Transaction> {
        debug!(lines = cart.len(), "Starting checkout");

        let mut tx = self.pool.begin().await?;

        // Units already taken from each product by earlier lines of this cart.
        let mut reserved: HashMap<i64, i64> = HashMap::new();
        let mut priced: Vec<PricedLine> = Vec::with_capacity(cart.len());

        for line in cart.lines() {
            let decremented: Option<DecrementedProduct> = sqlx::query_as(
                r#"
                UPDATE products
                SET stock = stock - ?1
                WHERE id = ?2 AND stock >= ?1
                RETURNING name, unit_price
                "#,
            )
            .bind(line.quantity)
            .bind(line.product_id)
            .fetch_optional(&mut *tx)
            .await?;

            let Some(product) = decremented else {
                let rejection =
                    Self::explain_rejection(&mut tx, line.product_id, line.quantity, &reserved)
                        .await?;
                warn!(product_id = line.product_id, error = %rejection, "Checkout rejected");
                return Err(rejection.into());
            };

            *reserved.entry(line.product_id).or_insert(0) += line.quantity;
            priced.push(PricedLine::new(
                line.product_id,
                product.name,
                product.unit_price,
                line.quantity,
            )?);
        }

        // The write lock is held from the first UPDATE on.
        let at = stamp.unwrap_or_else(Utc::now);

        let mut touched: Vec<i64> = reserved.keys().copied().collect();
        touched.sort_unstable();
        for product_id in touched {
            sqlx::query("UPDATE products SET updated_at = ?1 WHERE id = ?2")
                .bind(at)
                .bind(product_id)
                .execute(&mut *tx)
                .await?;
        }

        let total_amount = cart_total(&priced)?;
        let business_date = at.date_naive();

        let transaction_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO transactions (created_at, business_date, total_amount)
            VALUES (?1, ?2, ?3)
            RETURNING id
            "#,
        )
        .bind(at)
        .bind(business_date)
        .bind(total_amount)
        .fetch_one(&mut *tx)
        .await?;

        let mut details = Vec::with_capacity(priced.len());
        for line in priced {
            let detail_id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO transaction_details (
                    transaction_id, product_id, product_name,
                    unit_price, quantity, subtotal
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                RETURNING id
                "#,
            )
            .bind(transaction_id)
            .bind(line.product_id)
            .bind(&line.product_name)
            .bind(line.unit_price)
            .bind(line.quantity)
            .bind(line.subtotal)
            .fetch_one(&mut *tx)
            .await?;

            details.push(TransactionDetail {
                id: detail_id,
                transaction_id,
                product_id: line.product_id,
                product_name: line.product_name,
                unit_price: line.unit_price,
                quantity: line.quantity,
                subtotal: line.subtotal,
            });
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        debug!(
            transaction_id,
            total_amount = %total_amount,
            lines = details.len(),
            "Checkout committed"
        );

        Ok(Transaction {
            id: transaction_id,
            created_at: at,
            business_date,
            total_amount,
            details,
        })
    }

    /// Works out why the guarded decrement matched no row.
    async fn explain_rejection(
        tx: &mut sqlx::Transaction<'_, Sqlite>,
        product_id: i64,
        requested: i64,
        reserved: &HashMap<i64, i64>,
    ) -> DbResult<CoreError> {
        let snapshot: Option<StockSnapshot> =
            sqlx::query_as("SELECT name, stock FROM products WHERE id = ?1")
                .bind(product_id)
                .fetch_optional(&mut **tx)
                .await?;

        Ok(match snapshot {
            None => CoreError::ProductNotFound(product_id),
            Some(product) => {
                let already = reserved.get(&product_id).copied().unwrap_or(0);
                CoreError::InsufficientStock {
                    product_id,
                    name: product.name,
                    available: product.stock.saturating_add(already),
                    requested: already.saturating_add(requested),
                }
            }
        })
    }

    /// Gets a committed transaction with its details in cart order.
    pub async fn get_transaction(&self, id: i64) -> DbResult<Option<Transaction>> {
        let header: Option<Transaction> = sqlx::query_as(
            r#"
            SELECT id, created_at, business_date, total_amount
            FROM transactions
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(mut transaction) = header else {
            return Ok(None);
        };

        transaction.details = sqlx::query_as(
            r#"
            SELECT id, transaction_id, product_id, product_name,
                   unit_price, quantity, subtotal
            FROM transaction_details
            WHERE transaction_id = ?1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(transaction))
    }

    /// Counts committed transactions (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
