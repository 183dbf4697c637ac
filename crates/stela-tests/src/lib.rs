//! Test-only crate: shared helpers for the integration and adversarial
//! suites under `tests/`.

pub mod helpers;
