//! # Seed Data Generator
//!
//! Populates the database with sample stock records for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default development database
//! cargo run -p stockdesk-db --bin seed
//!
//! # Specify database path
//! cargo run -p stockdesk-db --bin seed -- --db ./data/stock.db
//! ```
//!
//! Every sample row carries a length-valid EAN-13 or UPC-A code, so the
//! seeded data looks exactly like data entered through the form.

use std::env;

use stockdesk_core::validation::{validate_code, validate_quantity};
use stockdesk_core::StockDraft;
use stockdesk_db::{Database, DbConfig};

/// Sample inventory: (product, description, quantity, code).
///
/// Codes are 12 digits (UPC-A) or 13 digits (EAN-13).
const SAMPLE_ITEMS: &[(&str, &str, i64, &str)] = &[
    ("Laptop", "14-inch ultrabook, 16 GB RAM", 4, "4006381333931"),
    ("Wireless Mouse", "2.4 GHz, USB receiver", 25, "123456789012"),
    ("Mechanical Keyboard", "Tenkeyless, brown switches", 10, "735858393492"),
    ("USB-C Cable", "2 m, braided", 60, "0123456789012"),
    ("Monitor", "27-inch IPS, 144 Hz", 7, "4006381333948"),
    ("Desk Lamp", "LED, dimmable", 15, "712345678904"),
    ("Notebook", "A5, ruled, 96 pages", 120, "9781234567897"),
    ("Ballpoint Pen", "Blue ink, 0.7 mm", 300, "036000291452"),
];

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./stock_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockdesk Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./stock_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Stockdesk Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");

    // Check existing records
    let existing = db.stock().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} records", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Insert sample records
    println!();
    println!("Inserting sample records...");

    for (product, description, quantity, code) in SAMPLE_ITEMS {
        // Same gate the form applies to user input
        validate_code(code)?;
        validate_quantity(&quantity.to_string())?;

        let draft = StockDraft {
            product: product.to_string(),
            description: description.to_string(),
            quantity: *quantity,
            code: code.to_string(),
        };

        let record = db.stock().insert(&draft).await?;
        println!("  #{:<3} {}", record.id, record.product);
    }

    println!();
    println!("✓ Inserted {} records", SAMPLE_ITEMS.len());

    // Verify search works against the seeded data
    println!();
    println!("Verifying search...");
    let results = db.stock().search("laptop").await?;
    println!("  Search 'laptop': {} result(s)", results.len());

    let results = db.stock().search("400638").await?;
    println!("  Search '400638': {} result(s)", results.len());

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
