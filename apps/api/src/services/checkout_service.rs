//! Checkout service.
//!
//! Validates a raw cart and hands it to the ledger for the atomic
//! stock-decrement-and-record transaction.

use tracing::{error, info, warn};

use kasir_core::{Cart, CartLine, Transaction};
use kasir_db::{Database, DbResult};

/// Checkout service.
#[derive(Debug, Clone)]
pub struct CheckoutService {
    db: Database,
}

impl CheckoutService {
    /// Create a new checkout service.
    pub fn new(db: Database) -> Self {
        CheckoutService { db }
    }

    /// Checks out `lines` as one transaction.
    ///
    /// ## Errors
    /// * `DbError::Rejected(InvalidCart)` - empty cart or quantity <= 0,
    ///   raised before the store is touched
    /// * `DbError::Rejected(ProductNotFound | InsufficientStock)`
    /// * any other `DbError` - storage failure; nothing was persisted
    pub async fn checkout(&self, lines: Vec<CartLine>) -> DbResult<Transaction> {
        let cart = Cart::new(lines).inspect_err(|e| warn!(error = %e, "Cart rejected"))?;

        let transaction = self.db.ledger().checkout(&cart).await.inspect_err(|e| {
            if e.as_rejection().is_none() {
                error!(error = %e, lines = cart.len(), "Checkout failed, rolled back");
            }
        })?;

        info!(
            transaction_id = transaction.id,
            total_amount = %transaction.total_amount,
            lines = transaction.details.len(),
            units = cart.total_quantity(),
            "Checkout complete"
        );

        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kasir_core::{CoreError, Money, NewProduct};
    use kasir_db::{DbConfig, DbError};

    async fn setup() -> (Database, CheckoutService) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let service = CheckoutService::new(db.clone());
        (db, service)
    }

    #[tokio::test]
    async fn test_checkout_success() {
        let (db, service) = setup().await;
        let p = db
            .products()
            .insert(&NewProduct {
                name: "Pecel Lele".to_string(),
                unit_price: Money::from_minor(18_000),
                stock: 4,
            })
            .await
            .unwrap();

        let tx = service
            .checkout(vec![CartLine {
                product_id: p.id,
                quantity: 2,
            }])
            .await
            .unwrap();

        assert_eq!(tx.total_amount, Money::from_minor(36_000));
        assert_eq!(db.products().get_by_id(p.id).await.unwrap().unwrap().stock, 2);
    }

    #[tokio::test]
    async fn test_huge_quantities_complete_after_commit() {
        let (db, service) = setup().await;
        let mut lines = Vec::new();
        for name in ["Kantong Plastik", "Sedotan"] {
            let p = db
                .products()
                .insert(&NewProduct {
                    name: name.to_string(),
                    unit_price: Money::zero(),
                    stock: i64::MAX,
                })
                .await
                .unwrap();
            lines.push(CartLine {
                product_id: p.id,
                quantity: i64::MAX,
            });
        }

        let tx = service.checkout(lines.clone()).await.unwrap();

        assert_eq!(tx.total_amount, Money::zero());
        assert_eq!(tx.details.len(), 2);
        for line in lines {
            let stock = db.products().get_by_id(line.product_id).await.unwrap().unwrap().stock;
            assert_eq!(stock, 0);
        }
    }

    #[tokio::test]
    async fn test_invalid_cart_never_reaches_store() {
        let (db, service) = setup().await;
        db.close().await;

        // A closed pool would turn any query into a storage failure.
        let err = service.checkout(vec![]).await.unwrap_err();
        assert!(matches!(err, DbError::Rejected(CoreError::InvalidCart { .. })));

        let err = service
            .checkout(vec![CartLine {
                product_id: 1,
                quantity: 0,
            }])
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Rejected(CoreError::InvalidCart { .. })));
    }
}
