use std::fmt;

/// An owned wide string stored as UTF-16 code units.
///
/// This is the wide counterpart of `String` held by [`Variant::WString`](crate::Variant::WString).
/// It is a distinct type so narrow and wide strings never match each other.
/// The buffer is not required to be valid UTF-16.
#[derive(Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WideString {
    units: Vec<u16>,
}

impl WideString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes `s` as UTF-16
    pub fn encode(s: &str) -> Self {
        Self {
            units: s.encode_utf16().collect(),
        }
    }

    pub fn from_units(units: Vec<u16>) -> Self {
        Self { units }
    }

    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    pub fn into_units(self) -> Vec<u16> {
        self.units
    }

    /// Number of code units, not characters
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn clear(&mut self) {
        self.units.clear();
    }

    pub fn push_str(&mut self, s: &str) {
        self.units.extend(s.encode_utf16());
    }

    /// Decodes to a `String`, replacing unpaired surrogates with U+FFFD
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }
}

impl Clone for WideString {
    fn clone(&self) -> Self {
        Self {
            units: self.units.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.units.clone_from(&source.units);
    }
}

impl From<&str> for WideString {
    fn from(s: &str) -> Self {
        Self::encode(s)
    }
}

impl From<Vec<u16>> for WideString {
    fn from(units: Vec<u16>) -> Self {
        Self::from_units(units)
    }
}

impl From<&[u16]> for WideString {
    fn from(units: &[u16]) -> Self {
        Self::from_units(units.to_vec())
    }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in char::decode_utf16(self.units.iter().copied()) {
            write!(f, "{}", c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf16_encoding() {
        let wide = WideString::from("Göteborg");
        assert_eq!(wide.len(), 8);
        assert_eq!(wide.as_units()[1], 'ö' as u16);
        assert_eq!(wide.to_string_lossy(), "Göteborg");
    }

    #[test]
    fn test_surrogate_pairs() {
        let wide = WideString::from("a😀");
        assert_eq!(wide.len(), 3);
        assert_eq!(wide.to_string(), "a😀");
    }

    #[test]
    fn test_lossy_unpaired_surrogate() {
        let wide = WideString::from_units(vec![0x0041, 0xD800]);
        assert_eq!(wide.to_string_lossy(), "A\u{FFFD}");
        assert_eq!(wide.to_string(), "A\u{FFFD}");
    }

    #[test]
    fn test_push_and_clear() {
        let mut wide = WideString::new();
        assert!(wide.is_empty());
        wide.push_str("wide");
        wide.push_str(" text");
        assert_eq!(wide, WideString::from("wide text"));
        wide.clear();
        assert!(wide.is_empty());
    }

    #[test]
    fn test_clone_from_keeps_buffer() {
        let mut target = WideString::from_units(Vec::with_capacity(32));
        let before = target.as_units().as_ptr();
        target.clone_from(&WideString::from("abc"));
        assert_eq!(target.to_string_lossy(), "abc");
        assert_eq!(target.as_units().as_ptr(), before);
    }

    #[test]
    fn test_unit_round_trip() {
        let units = vec![0x0068, 0x0069];
        let wide = WideString::from(units.as_slice());
        assert_eq!(wide.into_units(), units);
    }
}
