//! Scenario tests for the Agora client core live in `tests/`.
