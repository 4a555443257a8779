use crate::erased::ErasedValue;
use crate::error::PropertyError;
use crate::type_identity::TypeIdentity;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A keyed container of heterogeneous values.
///
/// Each entry owns one value of any `'static` type together with the identity
/// of that type. Values are only handed back when the requested type matches
/// the stored one exactly, so a wrong-type lookup reports absence instead of
/// reinterpreting the value.
///
/// A `PropertySet` owns its entries exclusively and cannot be cloned. Moving it
/// transfers every entry; `std::mem::take` leaves an empty set behind.
///
/// # Examples
///
/// ```
/// use sovran_propset::PropertySet;
///
/// let mut properties = PropertySet::<&str>::new();
/// properties.set("distance", 123.456f64);
/// properties.set("flat", 789i32);
/// properties.set("city_name", "Stockholm".to_string());
///
/// assert_eq!(properties.get::<f64>(&"distance"), Some(&123.456));
/// assert_eq!(properties.get::<bool>(&"flat"), None);
/// assert!(properties.is::<String>(&"city_name"));
/// ```
pub struct PropertySet<K> {
    values: HashMap<K, ErasedValue>,
}

impl<K> PropertySet<K>
where
    K: Eq + Hash + fmt::Debug,
{
    /// Creates a new, empty PropertySet
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Stores a value under `key`, dropping whatever was stored there before.
    ///
    /// The new value may have a different type than the one it replaces.
    pub fn set<T: Any>(&mut self, key: K, value: T) {
        let entry = ErasedValue::new(value);
        #[cfg(feature = "logging")]
        self.log_retype(&key, &entry);
        self.values.insert(key, entry);
    }

    #[cfg(feature = "logging")]
    fn log_retype(&self, key: &K, entry: &ErasedValue) {
        if let Some(previous) = self.values.get(key) {
            if previous.identity() != entry.identity() {
                log::debug!(
                    "property {:?} changes type from {} to {}",
                    key,
                    previous.identity(),
                    entry.identity()
                );
            }
        }
    }

    /// Stores the value produced by `f` under `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_propset::PropertySet;
    ///
    /// let mut properties = PropertySet::<String>::new();
    /// properties.set_with("squares".to_string(), || (1..=4).map(|n| n * n).collect::<Vec<u32>>());
    ///
    /// let squares = properties.get::<Vec<u32>>(&"squares".to_string());
    /// assert_eq!(squares.map(Vec::as_slice), Some(&[1, 4, 9, 16][..]));
    /// ```
    pub fn set_with<T: Any, F>(&mut self, key: K, f: F)
    where
        F: FnOnce() -> T,
    {
        self.set(key, f());
    }

    /// Returns the value at `key` if it exists and was stored as a `T`
    pub fn get<T: Any>(&self, key: &K) -> Option<&T> {
        self.values.get(key)?.downcast_ref::<T>()
    }

    /// Returns the value at `key`, reporting why it is unavailable
    ///
    /// # Errors
    ///
    /// - Returns `PropertyError::KeyNotFound` if the key doesn't exist
    /// - Returns `PropertyError::TypeMismatch` if the value was stored with another type
    pub fn try_get<T: Any>(&self, key: &K) -> Result<&T, PropertyError> {
        let entry = self
            .values
            .get(key)
            .ok_or_else(|| PropertyError::KeyNotFound(format!("{:?}", key)))?;
        entry
            .downcast_ref::<T>()
            .ok_or_else(|| PropertyError::TypeMismatch {
                expected: TypeIdentity::of::<T>().name(),
                found: entry.identity().name(),
            })
    }

    /// Returns true if anything is stored at `key`, whatever its type
    pub fn has(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    /// Returns true if the value at `key` was stored as a `T`
    pub fn is<T: Any>(&self, key: &K) -> bool {
        self.values.get(key).is_some_and(ErasedValue::is::<T>)
    }

    /// Returns the identity of the type stored at `key`
    pub fn type_of(&self, key: &K) -> Option<TypeIdentity> {
        self.values.get(key).map(ErasedValue::identity)
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Exchanges the entries of two sets
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.values, &mut other.values);
    }
}

impl<K> Default for PropertySet<K>
where
    K: Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for PropertySet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}
