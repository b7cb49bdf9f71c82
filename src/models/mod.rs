//! Data models for contact entries.

pub mod record;

pub use record::Record;
