//! Table-backed identifier registry.
//!
//! [`StandardRegistry`] knows the RFC 5280 extension names (short and long
//! forms), accepts dotted-decimal strings, and can be extended at runtime
//! with [`StandardRegistry::register`].

use std::collections::HashMap;

use crate::asn1::{ObjectIdentifier, OctetString};
use crate::config::ExtensionsConfig;
use crate::core::constants::STANDARD_EXTENSIONS;
use crate::core::{ExtensionError, ExtensionResult, Registry};

/// Registry of well-known and custom extension names.
#[derive(Debug, Clone)]
pub struct StandardRegistry {
    names: HashMap<String, ObjectIdentifier>,
    max_value_len: usize,
}

impl Default for StandardRegistry {
    fn default() -> Self {
        Self::with_config(&ExtensionsConfig::default())
    }
}

impl StandardRegistry {
    /// Registry with the standard table and no value length limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the standard table, enforcing `config.max_value_len`.
    pub fn with_config(config: &ExtensionsConfig) -> Self {
        let mut names = HashMap::with_capacity(STANDARD_EXTENSIONS.len() * 2);
        for (short, long, arcs) in STANDARD_EXTENSIONS {
            let oid = ObjectIdentifier::from_table(arcs);
            names.insert((*long).to_owned(), oid.clone());
            names.insert((*short).to_owned(), oid);
        }

        Self {
            names,
            max_value_len: config.max_value_len,
        }
    }

    /// Register `name` for `oid`, replacing any previous mapping of that name.
    pub fn register(&mut self, name: impl Into<String>, oid: ObjectIdentifier) {
        self.names.insert(name.into(), oid);
    }

    /// A name that currently resolves to `oid`.
    ///
    /// A standard short name is preferred while it still maps to `oid`;
    /// otherwise whichever registered name sorts first is returned.
    pub fn name_of(&self, oid: &ObjectIdentifier) -> Option<&str> {
        if let Some((short, _, _)) = STANDARD_EXTENSIONS
            .iter()
            .find(|(short, _, _)| self.names.get(*short) == Some(oid))
        {
            return Some(*short);
        }

        self.names
            .iter()
            .filter(|(_, registered)| *registered == oid)
            .map(|(name, _)| name.as_str())
            .min()
    }
}

impl Registry for StandardRegistry {
    fn resolve(&self, name: &str) -> Option<ObjectIdentifier> {
        if let Some(oid) = self.names.get(name) {
            return Some(oid.clone());
        }
        name.parse().ok()
    }

    fn copy_value(&self, dst: &mut OctetString, src: &[u8]) -> ExtensionResult<()> {
        if src.len() > self.max_value_len {
            return Err(ExtensionError::AllocationFailure(
                "extension value exceeds configured maximum length",
            ));
        }
        dst.set(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{BASIC_CONSTRAINTS, KEY_USAGE};

    #[test]
    fn test_resolve_short_and_long_names() {
        let registry = StandardRegistry::new();
        let expected = ObjectIdentifier::from_arcs(BASIC_CONSTRAINTS).unwrap();

        assert_eq!(registry.resolve("basicConstraints"), Some(expected.clone()));
        assert_eq!(registry.resolve("X509v3 Basic Constraints"), Some(expected));
    }

    #[test]
    fn test_resolve_dotted() {
        let registry = StandardRegistry::new();
        let oid = registry.resolve("1.2.840.113549.1.9.14").unwrap();
        assert_eq!(oid.to_string(), "1.2.840.113549.1.9.14");
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = StandardRegistry::new();
        assert_eq!(registry.resolve("noSuchExtension"), None);
        assert!(matches!(
            registry.require("noSuchExtension"),
            Err(ExtensionError::UnknownIdentifier(name)) if name == "noSuchExtension"
        ));
    }

    #[test]
    fn test_register_custom() {
        let mut registry = StandardRegistry::new();
        let oid: ObjectIdentifier = "1.3.6.1.4.1.99999.1".parse().unwrap();
        registry.register("exampleExt", oid.clone());

        assert_eq!(registry.resolve("exampleExt"), Some(oid.clone()));
        assert_eq!(registry.name_of(&oid), Some("exampleExt"));
    }

    #[test]
    fn test_name_of_standard() {
        let registry = StandardRegistry::new();
        let oid = ObjectIdentifier::from_arcs(KEY_USAGE).unwrap();
        assert_eq!(registry.name_of(&oid), Some("keyUsage"));
        assert_eq!(registry.name_of(&"1.2.3".parse().unwrap()), None);
    }

    #[test]
    fn test_name_of_follows_overridden_name() {
        let mut registry = StandardRegistry::new();
        let ku = ObjectIdentifier::from_arcs(KEY_USAGE).unwrap();
        let other: ObjectIdentifier = "1.2.3.4".parse().unwrap();
        registry.register("keyUsage", other.clone());

        let name = registry.name_of(&ku).unwrap();
        assert_eq!(name, "X509v3 Key Usage");
        assert_eq!(registry.resolve(name), Some(ku));
        assert_eq!(registry.name_of(&other), Some("keyUsage"));
    }

    #[test]
    fn test_name_of_round_trips_through_resolve() {
        let registry = StandardRegistry::new();
        for (_, _, arcs) in STANDARD_EXTENSIONS {
            let oid = ObjectIdentifier::from_arcs(arcs).unwrap();
            let name = registry.name_of(&oid).unwrap();
            assert_eq!(registry.resolve(name), Some(oid));
        }
    }

    #[test]
    fn test_value_length_limit() {
        let config = ExtensionsConfig::builder().max_value_len(4).build();
        let registry = StandardRegistry::with_config(&config);
        let mut value = OctetString::try_from_slice(b"keep").unwrap();

        assert!(matches!(
            registry.copy_value(&mut value, b"too long"),
            Err(ExtensionError::AllocationFailure(_))
        ));
        assert_eq!(value.as_bytes(), b"keep");

        registry.copy_value(&mut value, b"ok").unwrap();
        assert_eq!(value.as_bytes(), b"ok");
    }
}
