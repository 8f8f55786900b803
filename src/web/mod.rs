//! Web server for browser-based bacteria lookup.
//!
//! This module provides a small web interface and JSON API using Axum.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! bactopedia serve
//!
//! # Custom port, auto-open browser, catalog only
//! bactopedia serve --port 3000 --open --offline
//!
//! # Bind to all interfaces
//! bactopedia serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /` - Main page with the search box
//! - `GET /api/lookup?q=<name>` - Resolve a query to a single outcome
//! - `GET /api/catalog` - List all records in the catalog
//! - `GET /api/catalog/{key}` - A single record by canonical key

pub mod server;
