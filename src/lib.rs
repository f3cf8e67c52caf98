//! # Certext
//!
//! Ordered X.509v3 extension lists for certificate-like objects.
//!
//! Certext keeps the extensions of a certificate, CRL or request in
//! insertion order and provides:
//!
//! - **Duplicate-on-insert**: lists own deep copies; callers keep their records
//! - **Cursor search**: resumable scans by identifier, name, or criticality
//! - **Local failure recovery**: a failed insert or create frees only what it
//!   allocated and leaves caller state as it was
//! - **Absent-input handling**: [`extensions::handle`] accepts optional lists
//!   and records
//!
//! Extension values are opaque: encoding and the meaning of individual
//! extension types are left to the caller.
//!
//! ## Modules
//!
//! - [`core`]: Core traits, constants, and error types
//! - [`asn1`]: Object identifiers and octet strings
//! - [`extensions`]: Extension records and lists
//! - [`registry`]: Table of well-known extension names
//! - [`config`]: Size limits
//!
//! ## Example Usage
//!
//! ```rust
//! use certext::prelude::*;
//!
//! let registry = StandardRegistry::new();
//! let bc = Extension::create_by_name(&registry, "basicConstraints", true, &[0x30, 0x00]).unwrap();
//! let ku = Extension::create_by_name(&registry, "keyUsage", false, &[0x03, 0x02, 0x05, 0xa0]).unwrap();
//!
//! let mut list = None;
//! Extensions::insert_into(&mut list, &registry, &bc, None).unwrap();
//! Extensions::insert_into(&mut list, &registry, &ku, Some(0)).unwrap();
//!
//! let list = list.unwrap();
//! assert_eq!(list.find_by_name(&registry, "basicConstraints", None), Ok(Some(1)));
//! assert_eq!(list.find_by_critical(true, None), Some(1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod asn1;
pub mod config;
pub mod core;
pub mod extensions;
pub mod registry;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::asn1::{ObjectIdentifier, OctetString};
    pub use crate::config::{ExtensionsConfig, ExtensionsConfigBuilder};
    pub use crate::core::{ExtensionError, ExtensionHolder, ExtensionResult, Registry};
    pub use crate::extensions::{Extension, Extensions};
    pub use crate::registry::StandardRegistry;
}

// Re-export commonly used items at crate root
pub use crate::asn1::{ObjectIdentifier, OctetString};
pub use crate::core::{ExtensionError, ExtensionHolder, ExtensionResult, Registry};
pub use crate::extensions::{Extension, Extensions};
pub use crate::registry::StandardRegistry;
