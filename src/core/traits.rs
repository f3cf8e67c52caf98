//! Core traits for certext.
//!
//! [`Registry`] is the seam to the identifier registry and value codec that live
//! outside this crate. [`ExtensionHolder`] is implemented by certificate-like
//! objects that carry an extension list.

use super::error::{ExtensionError, ExtensionResult};
use crate::asn1::{ObjectIdentifier, OctetString};
use crate::extensions::{Extension, Extensions};

/// Name resolution and copy primitives consumed by record and collection code.
///
/// Only [`Registry::resolve`] is required. The copy primitives default to
/// fallible in-place copies and are overridden by registries that enforce
/// limits.
///
/// # Example
///
/// ```
/// use certext::prelude::*;
///
/// struct Fixed;
///
/// impl Registry for Fixed {
///     fn resolve(&self, name: &str) -> Option<ObjectIdentifier> {
///         (name == "basicConstraints").then(|| "2.5.29.19".parse().unwrap())
///     }
/// }
///
/// let ext = Extension::create_by_name(&Fixed, "basicConstraints", true, &[0x30, 0x00]).unwrap();
/// assert!(ext.is_critical());
/// ```
pub trait Registry {
    /// Map a symbolic name to its identifier, or `None` if it is not registered.
    fn resolve(&self, name: &str) -> Option<ObjectIdentifier>;

    /// Deep copy of an identifier.
    fn duplicate(&self, oid: &ObjectIdentifier) -> ExtensionResult<ObjectIdentifier> {
        oid.try_clone()
    }

    /// Copy `src` into the existing buffer `dst`.
    ///
    /// On failure `dst` keeps its previous contents.
    fn copy_value(&self, dst: &mut OctetString, src: &[u8]) -> ExtensionResult<()> {
        dst.set(src)
    }

    /// Resolve `name`, turning a miss into [`ExtensionError::UnknownIdentifier`].
    fn require(&self, name: &str) -> ExtensionResult<ObjectIdentifier> {
        self.resolve(name)
            .ok_or_else(|| ExtensionError::UnknownIdentifier(name.to_owned()))
    }
}

/// A certificate-like object that owns an optional extension list.
///
/// Implementors expose the list; the provided methods forward to
/// [`Extensions`] and treat a missing list as empty.
pub trait ExtensionHolder {
    /// The attached list, if any.
    fn extensions(&self) -> Option<&Extensions>;

    /// Slot holding the attached list. [`ExtensionHolder::add_ext`] fills it on
    /// first insert.
    fn extensions_slot(&mut self) -> &mut Option<Extensions>;

    /// Number of attached extensions.
    fn ext_count(&self) -> usize {
        Extensions::count(self.extensions())
    }

    /// Extension at `index`.
    fn get_ext(&self, index: usize) -> Option<&Extension> {
        self.extensions().and_then(|exts| exts.get(index))
    }

    /// Next position after `after` whose identifier equals `oid`.
    fn ext_by_oid(&self, oid: &ObjectIdentifier, after: Option<usize>) -> Option<usize> {
        self.extensions()
            .and_then(|exts| exts.find_by_oid(oid, after))
    }

    /// Next position after `after` whose identifier is registered as `name`.
    fn ext_by_name<R: Registry + ?Sized>(
        &self,
        registry: &R,
        name: &str,
        after: Option<usize>,
    ) -> ExtensionResult<Option<usize>> {
        let oid = registry.require(name)?;
        Ok(self.ext_by_oid(&oid, after))
    }

    /// Next position after `after` whose criticality equals `critical`.
    fn ext_by_critical(&self, critical: bool, after: Option<usize>) -> Option<usize> {
        self.extensions()
            .and_then(|exts| exts.find_by_critical(critical, after))
    }

    /// Remove and return the extension at `index`.
    fn delete_ext(&mut self, index: usize) -> Option<Extension> {
        self.extensions_slot()
            .as_mut()
            .and_then(|exts| exts.delete(index))
    }

    /// Insert a duplicate of `ext` at `index` (append when `None`).
    fn add_ext<R: Registry + ?Sized>(
        &mut self,
        registry: &R,
        ext: &Extension,
        index: Option<usize>,
    ) -> ExtensionResult<()> {
        Extensions::insert_into(self.extensions_slot(), registry, ext, index)?;
        Ok(())
    }
}
