//! End-to-end integration tests for the JobConnect HTTP API.
//!
//! These tests run against a live PostgreSQL instance configured in
//! `config/test.toml`. Each test creates its own uniquely-named accounts
//! so suites can run concurrently against one database.

mod helpers;

mod application_test;
mod auth_test;
mod job_test;
mod profile_test;
mod saved_job_test;
