//! Shared plumbing for the `segy-cli` binaries: the field name tables in [`fields`] and the
//! small stream-mode header reader in [`common`] every dumper builds on.
pub mod common;
pub mod fields;
