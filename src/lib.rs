//! Workspace-level tooling package.
//!
//! Carries the pre-commit hook configuration; the functionality lives in
//! `crates/pathcharge-lib` and `crates/pathcharge-cli`.
