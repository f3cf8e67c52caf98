//! Value types carried by extension records.
//!
//! Neither type interprets encoded content: an [`ObjectIdentifier`] is compared
//! arc by arc, and an [`OctetString`] is an opaque byte buffer.

mod octet_string;
mod oid;

pub use octet_string::*;
pub use oid::*;
