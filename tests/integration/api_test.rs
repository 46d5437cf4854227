//! API endpoint integration tests
//!
//! Database-backed tests for the accounts and chats domains, driven through
//! the composed routers. Requires a Postgres instance (TEST_DATABASE_URL or
//! DATABASE_URL); migrations run on startup.

#![allow(dead_code)]

mod accounts;
mod chats;
mod common;
