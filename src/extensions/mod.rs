//! Certificate extensions.
//!
//! | Type           | Role                                                 |
//! |----------------|------------------------------------------------------|
//! | [`Extension`]  | identifier + criticality + opaque value              |
//! | [`Extensions`] | ordered list owning deep copies of its extensions    |
//! | [`handle`]     | the same operations over optional lists and records  |
//!
//! ## Ownership
//!
//! Inserting copies the record; the caller keeps the original. Deleting hands
//! the stored record back to the caller. A failed insert drops only what that
//! insert allocated.

mod collection;
pub mod handle;
mod record;

pub use collection::*;
pub use record::*;
