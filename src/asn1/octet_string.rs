//! Opaque extension payloads.

use std::fmt;

use crate::core::ExtensionResult;

/// Owned byte buffer holding an encoded extension value.
///
/// The bytes are never interpreted here. [`OctetString::set`] overwrites the
/// existing buffer in place rather than swapping in a new one.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct OctetString {
    data: Vec<u8>,
}

impl OctetString {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `bytes` into a freshly reserved buffer.
    pub fn try_from_slice(bytes: &[u8]) -> ExtensionResult<Self> {
        let mut value = Self::new();
        value.set(bytes)?;
        Ok(value)
    }

    /// Replace the contents with `bytes`, resizing in place.
    ///
    /// On allocation failure the previous contents are left intact.
    pub fn set(&mut self, bytes: &[u8]) -> ExtensionResult<()> {
        if bytes.len() > self.data.len() {
            self.data.try_reserve(bytes.len() - self.data.len())?;
        }
        self.data.clear();
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Contents as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for OctetString {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for OctetString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OctetString(")?;
        for byte in &self.data {
            write!(f, "{byte:02x}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_in_place() {
        let mut value = OctetString::try_from_slice(b"longer payload").unwrap();
        let ptr = value.as_bytes().as_ptr();

        value.set(b"short").unwrap();
        assert_eq!(value.as_bytes(), b"short");
        assert_eq!(value.len(), 5);
        // Shrinking never reallocates.
        assert_eq!(value.as_bytes().as_ptr(), ptr);
    }

    #[test]
    fn test_set_grows() {
        let mut value = OctetString::new();
        assert!(value.is_empty());

        value.set(&[0x30, 0x03, 0x01, 0x01, 0xff]).unwrap();
        assert_eq!(value.len(), 5);
    }

    #[test]
    fn test_debug_is_hex() {
        let value = OctetString::try_from_slice(&hex::decode("0403abcdef").unwrap()).unwrap();
        assert_eq!(format!("{value:?}"), "OctetString(0403abcdef)");
    }
}
