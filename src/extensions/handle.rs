//! Entry points that accept absent inputs.
//!
//! Certificate code often holds its extension list as an `Option` and builds
//! records lazily. These functions take those optional handles directly:
//! read operations treat a missing list or record as empty, and mutating
//! operations report [`ExtensionError::NullArgument`] instead.

use super::collection::Extensions;
use super::record::Extension;
use crate::asn1::{ObjectIdentifier, OctetString};
use crate::core::{ExtensionError, ExtensionResult, Registry};

/// Number of extensions, 0 for a missing list.
pub fn count(exts: Option<&Extensions>) -> usize {
    Extensions::count(exts)
}

/// Borrow the extension at `index`.
pub fn get(exts: Option<&Extensions>, index: usize) -> Option<&Extension> {
    exts?.get(index)
}

/// Remove the extension at `index` and transfer it to the caller.
pub fn delete(exts: Option<&mut Extensions>, index: usize) -> Option<Extension> {
    exts?.delete(index)
}

/// See [`Extensions::find_by_oid`].
pub fn find_by_oid(
    exts: Option<&Extensions>,
    oid: &ObjectIdentifier,
    after: Option<usize>,
) -> Option<usize> {
    exts?.find_by_oid(oid, after)
}

/// See [`Extensions::find_by_critical`].
pub fn find_by_critical(
    exts: Option<&Extensions>,
    critical: bool,
    after: Option<usize>,
) -> Option<usize> {
    exts?.find_by_critical(critical, after)
}

/// See [`Extensions::find_by_name`]. The name is resolved even when the list
/// is missing, so an unknown name is always reported.
pub fn find_by_name<R: Registry + ?Sized>(
    exts: Option<&Extensions>,
    registry: &R,
    name: &str,
    after: Option<usize>,
) -> ExtensionResult<Option<usize>> {
    let oid = registry.require(name)?;
    Ok(find_by_oid(exts, &oid, after))
}

/// Insert a duplicate of `ext` through an optional collection handle.
///
/// A missing handle is a [`ExtensionError::NullArgument`]. Otherwise behaves
/// like [`Extensions::insert_into`].
pub fn insert<'a, R: Registry + ?Sized>(
    handle: Option<&'a mut Option<Extensions>>,
    registry: &R,
    ext: &Extension,
    index: Option<usize>,
) -> ExtensionResult<&'a mut Extensions> {
    let slot = handle.ok_or(ExtensionError::NullArgument("collection handle"))?;
    Extensions::insert_into(slot, registry, ext, index)
}

/// Build a record in `slot`.
///
/// A record already in the slot is overwritten in place with
/// [`Extension::reassign`] and is kept on failure, possibly partially
/// updated. An empty slot receives a new record only on success.
pub fn create<'a, R: Registry + ?Sized>(
    slot: &'a mut Option<Extension>,
    registry: &R,
    oid: &ObjectIdentifier,
    critical: bool,
    value: &[u8],
) -> ExtensionResult<&'a mut Extension> {
    match slot {
        Some(ext) => {
            ext.reassign(registry, oid, critical, value)?;
            Ok(ext)
        }
        None => {
            let ext = Extension::create(registry, oid, critical, value)?;
            Ok(slot.insert(ext))
        }
    }
}

/// [`create`] with the identifier looked up by name.
///
/// An unknown name fails before the slot is touched.
pub fn create_by_name<'a, R: Registry + ?Sized>(
    slot: &'a mut Option<Extension>,
    registry: &R,
    name: &str,
    critical: bool,
    value: &[u8],
) -> ExtensionResult<&'a mut Extension> {
    match slot {
        Some(ext) => {
            ext.reassign_by_name(registry, name, critical, value)?;
            Ok(ext)
        }
        None => {
            let ext = Extension::create_by_name(registry, name, critical, value)?;
            Ok(slot.insert(ext))
        }
    }
}

/// Replace a record's identifier.
pub fn set_oid<R: Registry + ?Sized>(
    ext: Option<&mut Extension>,
    registry: &R,
    oid: Option<&ObjectIdentifier>,
) -> ExtensionResult<()> {
    let ext = ext.ok_or(ExtensionError::NullArgument("extension"))?;
    let oid = oid.ok_or(ExtensionError::NullArgument("identifier"))?;
    ext.set_oid(registry, oid)
}

/// Set a record's criticality.
pub fn set_critical(ext: Option<&mut Extension>, critical: bool) -> ExtensionResult<()> {
    let ext = ext.ok_or(ExtensionError::NullArgument("extension"))?;
    ext.set_critical(critical);
    Ok(())
}

/// Copy bytes into a record's existing value buffer.
pub fn set_value<R: Registry + ?Sized>(
    ext: Option<&mut Extension>,
    registry: &R,
    value: Option<&[u8]>,
) -> ExtensionResult<()> {
    let ext = ext.ok_or(ExtensionError::NullArgument("extension"))?;
    let value = value.ok_or(ExtensionError::NullArgument("value"))?;
    ext.set_value(registry, value)
}

/// Borrow a record's identifier.
pub fn get_oid(ext: Option<&Extension>) -> Option<&ObjectIdentifier> {
    ext.map(Extension::oid)
}

/// Borrow a record's value.
pub fn get_value(ext: Option<&Extension>) -> Option<&OctetString> {
    ext.map(Extension::value)
}

/// Whether a record is critical; `false` for a missing record.
pub fn get_critical(ext: Option<&Extension>) -> bool {
    ext.is_some_and(Extension::is_critical)
}
