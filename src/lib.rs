//! Workspace-level integration tests for mtmath live under `tests/`.
