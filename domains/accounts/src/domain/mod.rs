//! Domain model for the Accounts domain

pub mod entities;
