use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A runtime token identifying a single Rust type.
///
/// Two identities compare equal if and only if they were obtained for the same
/// type. The token is `Copy`, stable for the whole process and never needs to be
/// released.
///
/// # Examples
///
/// ```
/// use sovran_propset::TypeIdentity;
///
/// assert_eq!(TypeIdentity::of::<i32>(), TypeIdentity::of::<i32>());
/// assert_ne!(TypeIdentity::of::<i32>(), TypeIdentity::of::<i64>());
/// assert!(TypeIdentity::of::<String>().name().ends_with("String"));
/// ```
#[derive(Clone, Copy)]
pub struct TypeIdentity {
    id: TypeId,
    name: &'static str,
}

impl TypeIdentity {
    /// Returns the identity of `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The type's name as reported by the compiler, for diagnostics only
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if this identity belongs to `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

/// Shorthand for [`TypeIdentity::of`]
pub fn identity_of<T: ?Sized + 'static>() -> TypeIdentity {
    TypeIdentity::of::<T>()
}

// The name is not guaranteed unique, only the id takes part in comparisons.
impl PartialEq for TypeIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeIdentity {}

impl Hash for TypeIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeIdentity({})", self.name)
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Marker;

    #[test]
    fn test_same_type_is_stable() {
        assert_eq!(identity_of::<f64>(), identity_of::<f64>());
        assert_eq!(identity_of::<Marker>(), TypeIdentity::of::<Marker>());
        assert_eq!(identity_of::<Vec<String>>(), identity_of::<Vec<String>>());
    }

    #[test]
    fn test_distinct_types_differ() {
        assert_ne!(identity_of::<i32>(), identity_of::<u32>());
        assert_ne!(identity_of::<String>(), identity_of::<&'static str>());
        assert_ne!(identity_of::<Vec<i32>>(), identity_of::<Vec<i64>>());
        assert_ne!(identity_of::<*const i32>(), identity_of::<*mut i32>());
        assert_ne!(identity_of::<()>(), identity_of::<Marker>());
    }

    #[test]
    fn test_unsized_types() {
        assert_eq!(identity_of::<str>(), identity_of::<str>());
        assert_ne!(identity_of::<str>(), identity_of::<[u8]>());
    }

    #[test]
    fn test_is() {
        let id = identity_of::<u8>();
        assert!(id.is::<u8>());
        assert!(!id.is::<i8>());
    }

    #[test]
    fn test_hash_follows_equality() {
        let mut seen = HashSet::new();
        seen.insert(identity_of::<i32>());
        seen.insert(identity_of::<i32>());
        seen.insert(identity_of::<bool>());
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_debug_uses_type_name() {
        let rendered = format!("{:?}", identity_of::<Marker>());
        assert!(rendered.starts_with("TypeIdentity("));
        assert!(rendered.contains("Marker"));
    }
}
