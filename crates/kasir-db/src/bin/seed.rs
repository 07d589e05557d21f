//! # Seed Data Generator
//!
//! Populates the database with a warung-style catalogue (categories and
//! products) and, optionally, a few days of sample sales so the report
//! endpoints have something to show.
//!
//! ## Usage
//! ```bash
//! cargo run -p kasir-db --bin seed
//! cargo run -p kasir-db --bin seed -- --db ./data/kasir.db --sales 40 --days 7
//! ```

use std::env;

use chrono::{Duration, Utc};
use kasir_core::{Cart, CartLine, Money, NewCategory, NewProduct};
use kasir_db::{Database, DbConfig, DbError};

/// (name, unit price in rupiah, starting stock)
const CATALOGUE: &[(&str, i64, i64)] = &[
    ("Indomie Goreng", 3_500, 200),
    ("Indomie Soto", 3_500, 150),
    ("Teh Botol Sosro", 5_000, 120),
    ("Aqua 600ml", 4_000, 240),
    ("Kopi Kapal Api", 2_000, 300),
    ("Gula Pasir 1kg", 17_000, 40),
    ("Beras Pandan Wangi 5kg", 78_000, 25),
    ("Minyak Goreng 2L", 36_000, 30),
    ("Telur Ayam (10 butir)", 28_000, 35),
    ("Sabun Lifebuoy", 4_500, 80),
    ("Rokok Filter 12", 26_000, 60),
    ("Chitato 68g", 11_000, 70),
    ("Susu Ultra 250ml", 6_500, 90),
    ("Roti Tawar Sari Roti", 16_000, 20),
    ("Kecap Bango 220ml", 9_500, 45),
];

/// (name, description)
const CATEGORIES: &[(&str, &str)] = &[
    ("Makanan", "Berbagai jenis makanan instan dan siap saji"),
    ("Minuman", "Aneka minuman segar dan kemasan"),
    ("Bumbu Dapur", "Perlengkapan bumbu untuk memasak"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./kasir_dev.db");
    let mut sales: usize = 0;
    let mut days: i64 = 7;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--sales" | "-s" => {
                if i + 1 < args.len() {
                    sales = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            "--days" => {
                if i + 1 < args.len() {
                    days = args[i + 1].parse().unwrap_or(7).max(1);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Kasir Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>     Database file path (default: ./kasir_dev.db)");
                println!("  -s, --sales <N>     Sample checkouts to record (default: 0)");
                println!("      --days <N>      Spread sample sales over the last N days (default: 7)");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Kasir Seed Data Generator");
    println!("=========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    for (name, description) in CATEGORIES {
        db.categories()
            .insert(&NewCategory {
                name: name.to_string(),
                description: description.to_string(),
            })
            .await?;
    }
    println!("✓ Inserted {} categories", CATEGORIES.len());

    let mut ids = Vec::with_capacity(CATALOGUE.len());
    for (name, price, stock) in CATALOGUE {
        let product = db
            .products()
            .insert(&NewProduct {
                name: name.to_string(),
                unit_price: Money::from_minor(*price),
                stock: *stock,
            })
            .await?;
        ids.push(product.id);
    }
    println!("✓ Inserted {} products", ids.len());

    if sales == 0 {
        println!();
        println!("✓ Seed complete!");
        return Ok(());
    }

    let now = Utc::now();
    let mut recorded = 0;
    let mut skipped = 0;

    for n in 0..sales {
        // Deterministic spread: a couple of lines per sale, walking the
        // catalogue and the day window at different strides.
        let first = ids[(n * 7) % ids.len()];
        let second = ids[(n * 3 + 1) % ids.len()];
        let lines = vec![
            CartLine {
                product_id: first,
                quantity: (n % 3 + 1) as i64,
            },
            CartLine {
                product_id: second,
                quantity: 1,
            },
        ];
        let at = now - Duration::days((n as i64) % days) - Duration::minutes((n as i64 * 17) % 600);

        match db.ledger().checkout_at(&Cart::new(lines)?, at).await {
            Ok(_) => recorded += 1,
            Err(DbError::Rejected(e)) => {
                eprintln!("  Skipped sale {}: {}", n, e);
                skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!("✓ Recorded {} sample sales ({} skipped)", recorded, skipped);
    println!();
    println!("✓ Seed complete!");

    Ok(())
}
