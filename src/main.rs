//! Addrbook demo driver.
//!
//! Builds a small book inside an auto-saving session, then reloads the
//! snapshot and walks through paging and search.

use addrbook::{AddressBook, BookSession, Config, Record};
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only, so demo output stays on stdout)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "Using snapshot file {} with page size {}",
        config.snapshot_path.display(),
        config.page_size
    );

    // Build the book; the session persists it when the scope ends.
    {
        let mut session = BookSession::create(&config.snapshot_path);
        for (name, phone) in [
            ("Kate", "1234567890"),
            ("Kacy", "1122334455"),
            ("Jhon", "1111111111"),
            ("Jhonatan", "2222222222"),
            ("Jeck", "1973824650"),
            ("Don", "1236547890"),
        ] {
            let mut record = Record::new(name);
            record.add_phone(phone)?;
            session.add_record(record);
        }
        session.close()?;
    }

    // Reload the snapshot into a fresh book.
    let book = AddressBook::open(&config.snapshot_path)?;
    info!("Loaded {} records", book.len());

    for page in book.pages(config.page_size)? {
        println!("{}", page);
        println!("-----------------------------");
    }

    for query in ["kate", "22", "111", "0", "jh"] {
        println!("{}", book.find(query).join("\n"));
        println!("-----------------------------");
    }

    Ok(())
}
