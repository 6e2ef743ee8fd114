//! Shared test utilities for sym-db unit tests.
