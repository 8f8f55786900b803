//! Curated bacteria catalog storage.
//!
//! The catalog holds the curated records that queries are matched against first.
//! An embedded catalog is compiled into the binary, but custom catalogs can also
//! be loaded from JSON files with the same layout.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bactopedia::BacteriaCatalog;
//! use bactopedia::core::types::RecordKey;
//!
//! let catalog = BacteriaCatalog::load_embedded().unwrap();
//!
//! for record in &catalog.records {
//!     println!("{}", record.key);
//! }
//!
//! let ecoli = catalog.get(&RecordKey::new("escherichia coli"));
//! ```
//!
//! ## Custom Catalogs
//!
//! ```rust,no_run
//! use bactopedia::BacteriaCatalog;
//! use std::path::Path;
//!
//! let catalog = BacteriaCatalog::load_embedded().unwrap();
//! let json = catalog.to_json().unwrap();
//!
//! let custom = BacteriaCatalog::load_from_file(Path::new("my_catalog.json")).unwrap();
//! ```

pub mod store;
