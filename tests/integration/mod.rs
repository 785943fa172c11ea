//! Integration tests
//!
//! Exercise the full router over a real (in-memory) database.
