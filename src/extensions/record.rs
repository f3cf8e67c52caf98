//! Extension records.
//!
//! An [`Extension`] pairs an identifier with a criticality flag and an opaque
//! value. Construction goes through a [`Registry`] so identifier and value
//! copies can fail and be reported instead of aborting.

use tracing::debug;

use crate::asn1::{ObjectIdentifier, OctetString};
use crate::core::{ExtensionResult, Registry};

/// A single certificate extension.
///
/// Equality compares identifier, criticality and value bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    oid: ObjectIdentifier,
    critical: bool,
    value: OctetString,
}

impl Extension {
    /// Assemble an extension from parts the caller already owns.
    pub fn new(oid: ObjectIdentifier, critical: bool, value: OctetString) -> Self {
        Self {
            oid,
            critical,
            value,
        }
    }

    /// Create a new extension, copying `oid` and `value` through `registry`.
    ///
    /// Nothing is kept if any copy fails.
    pub fn create<R: Registry + ?Sized>(
        registry: &R,
        oid: &ObjectIdentifier,
        critical: bool,
        value: &[u8],
    ) -> ExtensionResult<Self> {
        let build = || -> ExtensionResult<Self> {
            let oid = registry.duplicate(oid)?;
            let mut buf = OctetString::new();
            registry.copy_value(&mut buf, value)?;
            Ok(Self::new(oid, critical, buf))
        };

        build().inspect_err(|err| debug!(%oid, %err, "extension construction failed"))
    }

    /// Create a new extension whose identifier is registered as `name`.
    pub fn create_by_name<R: Registry + ?Sized>(
        registry: &R,
        name: &str,
        critical: bool,
        value: &[u8],
    ) -> ExtensionResult<Self> {
        let oid = resolve_name(registry, name)?;
        Self::create(registry, &oid, critical, value)
    }

    /// Overwrite identifier, criticality and value of this extension, in that
    /// order.
    ///
    /// Not transactional: if the value copy fails, the new identifier and
    /// criticality stay in place.
    pub fn reassign<R: Registry + ?Sized>(
        &mut self,
        registry: &R,
        oid: &ObjectIdentifier,
        critical: bool,
        value: &[u8],
    ) -> ExtensionResult<()> {
        self.set_oid(registry, oid)?;
        self.set_critical(critical);
        self.set_value(registry, value)
            .inspect_err(|err| debug!(%oid, %err, "extension value update failed"))
    }

    /// [`Extension::reassign`] with the identifier looked up by name.
    ///
    /// An unknown name fails before anything is modified.
    pub fn reassign_by_name<R: Registry + ?Sized>(
        &mut self,
        registry: &R,
        name: &str,
        critical: bool,
        value: &[u8],
    ) -> ExtensionResult<()> {
        let oid = resolve_name(registry, name)?;
        self.reassign(registry, &oid, critical, value)
    }

    /// Replace the identifier with a copy of `oid`.
    ///
    /// The previous identifier is kept if the copy fails.
    pub fn set_oid<R: Registry + ?Sized>(
        &mut self,
        registry: &R,
        oid: &ObjectIdentifier,
    ) -> ExtensionResult<()> {
        self.oid = registry.duplicate(oid)?;
        Ok(())
    }

    /// Mark the extension critical or non-critical.
    pub fn set_critical(&mut self, critical: bool) {
        self.critical = critical;
    }

    /// Copy `value` into the existing value buffer.
    pub fn set_value<R: Registry + ?Sized>(
        &mut self,
        registry: &R,
        value: &[u8],
    ) -> ExtensionResult<()> {
        registry.copy_value(&mut self.value, value)
    }

    /// Deep copy through `registry`.
    pub fn try_dup<R: Registry + ?Sized>(&self, registry: &R) -> ExtensionResult<Self> {
        Self::create(registry, &self.oid, self.critical, self.value.as_bytes())
    }

    /// Identifier of this extension.
    pub fn oid(&self) -> &ObjectIdentifier {
        &self.oid
    }

    /// Encoded value.
    pub fn value(&self) -> &OctetString {
        &self.value
    }

    /// Whether a consumer that does not understand this extension must reject
    /// the certificate.
    pub fn is_critical(&self) -> bool {
        self.critical
    }
}

fn resolve_name<R: Registry + ?Sized>(
    registry: &R,
    name: &str,
) -> ExtensionResult<ObjectIdentifier> {
    registry
        .require(name)
        .inspect_err(|err| debug!(name, %err, "extension name did not resolve"))
}
