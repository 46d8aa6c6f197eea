//! Integration tests for Marlin.
//!
//! # Running Tests
//!
//! The tests in `tests/` need a live MongoDB and are `#[ignore]`d by
//! default. Point `MARLIN_DATABASE_URL` at a disposable database first:
//!
//! ```bash
//! export MARLIN_DATABASE_URL="mongodb://localhost:27017/marlin_test"
//! cargo test -p marlin-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `admin_provision` - Idempotence, credential rotation, and role/status
//!   normalization of the admin bootstrap routine, observed through a
//!   separate client connection.
//!
//! Every test uses a unique email per run and deletes its own documents, so
//! the suite can be re-run against the same database.
