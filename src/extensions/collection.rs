//! Ordered extension lists.
//!
//! [`Extensions`] owns deep copies of the records inserted into it. Lookups
//! take an `after` cursor so callers can resume a scan where the previous
//! match left off:
//!
//! ```
//! use certext::prelude::*;
//!
//! let registry = StandardRegistry::new();
//! let san = Extension::create_by_name(&registry, "subjectAltName", false, b"a").unwrap();
//!
//! let mut exts = Extensions::new();
//! exts.insert(&registry, &san, None).unwrap();
//! exts.insert(&registry, &san, None).unwrap();
//!
//! let mut after = None;
//! let mut hits = Vec::new();
//! while let Some(index) = exts.find_by_oid(san.oid(), after) {
//!     hits.push(index);
//!     after = Some(index);
//! }
//! assert_eq!(hits, [0, 1]);
//! ```

use tracing::{debug, trace};

use super::record::Extension;
use crate::asn1::ObjectIdentifier;
use crate::config::ExtensionsConfig;
use crate::core::{ExtensionError, ExtensionResult, Registry};

/// Ordered list of extensions attached to one certificate-like object.
#[derive(Debug, Clone)]
pub struct Extensions {
    items: Vec<Extension>,
    max_extensions: usize,
}

impl Default for Extensions {
    fn default() -> Self {
        Self::with_config(&ExtensionsConfig::default())
    }
}

impl PartialEq for Extensions {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for Extensions {}

impl Extensions {
    /// Create an empty list with no size limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list bounded by `config.max_extensions`.
    pub fn with_config(config: &ExtensionsConfig) -> Self {
        Self {
            items: Vec::new(),
            max_extensions: config.max_extensions,
        }
    }

    /// Number of extensions in `exts`, treating a missing list as empty.
    pub fn count(exts: Option<&Self>) -> usize {
        exts.map_or(0, Self::len)
    }

    /// Number of extensions.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Extension at `index`.
    pub fn get(&self, index: usize) -> Option<&Extension> {
        self.items.get(index)
    }

    /// Remove the extension at `index` and hand it to the caller.
    ///
    /// Later extensions shift down by one.
    pub fn delete(&mut self, index: usize) -> Option<Extension> {
        if index >= self.items.len() {
            return None;
        }
        let ext = self.items.remove(index);
        trace!(index, oid = %ext.oid(), "extension removed");
        Some(ext)
    }

    /// Position of the first extension after `after` whose identifier equals
    /// `oid`. `None` as cursor starts from the beginning.
    pub fn find_by_oid(&self, oid: &ObjectIdentifier, after: Option<usize>) -> Option<usize> {
        self.scan(after, |ext| ext.oid() == oid)
    }

    /// Position of the first extension after `after` with the given
    /// criticality.
    pub fn find_by_critical(&self, critical: bool, after: Option<usize>) -> Option<usize> {
        self.scan(after, |ext| ext.is_critical() == critical)
    }

    /// [`Extensions::find_by_oid`] with the identifier looked up by name.
    ///
    /// An unregistered name is an error, so it can be told apart from an
    /// extension that is simply not present.
    pub fn find_by_name<R: Registry + ?Sized>(
        &self,
        registry: &R,
        name: &str,
        after: Option<usize>,
    ) -> ExtensionResult<Option<usize>> {
        let oid = registry.require(name)?;
        Ok(self.find_by_oid(&oid, after))
    }

    /// Every position holding `oid`, in order.
    pub fn positions_of<'a>(
        &'a self,
        oid: &'a ObjectIdentifier,
    ) -> impl Iterator<Item = usize> + 'a {
        std::iter::successors(self.find_by_oid(oid, None), move |&last| {
            self.find_by_oid(oid, Some(last))
        })
    }

    fn scan(&self, after: Option<usize>, matches: impl Fn(&Extension) -> bool) -> Option<usize> {
        let start = after.map_or(0, |last| last.saturating_add(1));
        self.items
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, ext)| matches(*ext))
            .map(|(index, _)| index)
    }

    /// Insert a duplicate of `ext` at `index`, returning where it landed.
    ///
    /// `None` or an index at or past the end appends. On failure the list is
    /// unchanged and the duplicate is dropped.
    pub fn insert<R: Registry + ?Sized>(
        &mut self,
        registry: &R,
        ext: &Extension,
        index: Option<usize>,
    ) -> ExtensionResult<usize> {
        self.try_insert(registry, ext, index).inspect_err(|err| {
            debug!(oid = %ext.oid(), %err, "extension insert failed");
        })
    }

    fn try_insert<R: Registry + ?Sized>(
        &mut self,
        registry: &R,
        ext: &Extension,
        index: Option<usize>,
    ) -> ExtensionResult<usize> {
        let dup = ext.try_dup(registry)?;

        if self.items.len() >= self.max_extensions {
            return Err(ExtensionError::AllocationFailure(
                "extension list is at its configured capacity",
            ));
        }
        self.items.try_reserve(1)?;

        let len = self.items.len();
        let position = match index {
            Some(index) if index < len => index,
            _ => len,
        };
        self.items.insert(position, dup);

        trace!(position, oid = %ext.oid(), "extension inserted");
        Ok(position)
    }

    /// Insert a duplicate of `ext` into the list held by `slot`, creating the
    /// list if the slot is empty.
    ///
    /// A new list is written into the slot only on success. If the slot
    /// already held a list, a failure leaves that list untouched.
    pub fn insert_into<'a, R: Registry + ?Sized>(
        slot: &'a mut Option<Self>,
        registry: &R,
        ext: &Extension,
        index: Option<usize>,
    ) -> ExtensionResult<&'a mut Self> {
        Self::insert_into_with_config(slot, &ExtensionsConfig::default(), registry, ext, index)
    }

    /// [`Extensions::insert_into`], creating a missing list with `config`.
    pub fn insert_into_with_config<'a, R: Registry + ?Sized>(
        slot: &'a mut Option<Self>,
        config: &ExtensionsConfig,
        registry: &R,
        ext: &Extension,
        index: Option<usize>,
    ) -> ExtensionResult<&'a mut Self> {
        match slot {
            Some(exts) => {
                exts.insert(registry, ext, index)?;
                Ok(exts)
            }
            None => {
                let mut fresh = Self::with_config(config);
                fresh.insert(registry, ext, index)?;
                Ok(slot.insert(fresh))
            }
        }
    }

    /// Iterate over extensions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Extension> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Extensions {
    type Item = &'a Extension;
    type IntoIter = std::slice::Iter<'a, Extension>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
