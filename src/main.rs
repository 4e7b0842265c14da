//! Address Book - demo entry point
//!
//! Loads the configured address book, runs the core operations against it and
//! saves the result. Demo output goes to stdout, logs go to stderr.

use address_book::{AddressBook, Config, Record};
use anyhow::{Context, Result};
use chrono::Local;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.as_str())
        .unwrap_or("error");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Using address book file: {}", config.book_path.display());

    let mut book = AddressBook::new();
    book.load_from_file(&config.book_path)
        .with_context(|| format!("loading {}", config.book_path.display()))?;
    info!("Loaded {} existing records", book.len());

    let mut john = Record::new("John Doe", Some("1990-05-15"))?;
    if let Err(e) = john.add_phone("123-456-7890") {
        warn!("Rejected phone for {}: {}", john.name(), e);
        println!("Rejected: {}", e);
    }
    john.add_phone("1234567890")?;
    john.add_phone("9876543210")?;
    book.add_record(john);

    let mut jane = Record::new("Jane Smith", None)?;
    jane.add_phone("5551234567")?;
    book.add_record(jane);

    println!("== Search by name: John Doe");
    for record in book.search_by_name("John Doe") {
        println!("{}", record);
    }

    println!("== Search by phone: 1234567890");
    for record in book.search_by_phone("1234567890") {
        println!("{}", record);
    }

    let today = Local::now().date_naive();
    println!("== Days to birthday (today is {})", today);
    for record in &book {
        match record.days_to_birthday(today) {
            Some(days) => println!("{}: {} days", record.name(), days),
            None => println!("{}: no birthday set", record.name()),
        }
    }

    println!(
        "== Birthdays in the next {} days",
        config.upcoming_birthday_days
    );
    for (record, days) in book.upcoming_birthdays(today, config.upcoming_birthday_days) {
        println!("{} in {} days", record.name(), days);
    }

    println!("== Similar to \"jon do\"");
    for (record, confidence) in book.find_similar(
        "jon do",
        config.max_match_results,
        config.match_confidence_threshold,
    ) {
        println!("{} ({}%)", record.name(), confidence);
    }

    book.save_to_file(&config.book_path)
        .with_context(|| format!("saving {}", config.book_path.display()))?;
    info!("Saved {} records", book.len());

    let mut reloaded = AddressBook::new();
    reloaded
        .load_from_file(&config.book_path)
        .with_context(|| format!("reloading {}", config.book_path.display()))?;

    println!("== Reloaded from {}", config.book_path.display());
    println!("{}", reloaded);

    Ok(())
}
