//! Backing resources served by the mock server
//!
//! Each resource is an explicit object owned by the application state rather
//! than ambient static data, so several servers can run side by side in
//! parallel test runs.

pub mod blob;
pub mod capital;

pub use blob::BlobStore;
pub use capital::CapitalTable;
