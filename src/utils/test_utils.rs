//! Shared fixtures for codec tests.
