//! End-to-end workflow tests.
//!
//! These drive a [`Session`](crate::Session) through full upload → process →
//! color → apply-all scenarios against an in-memory service.

mod workflow_tests;
