use crate::type_identity::TypeIdentity;
use std::any::Any;
use std::fmt;

/// A container for one type-erased value that remembers the type it was built from
pub(crate) struct ErasedValue {
    identity: TypeIdentity,
    value: Box<dyn Any>,
}

impl ErasedValue {
    /// Create a new ErasedValue owning `value`
    pub(crate) fn new<T: Any>(value: T) -> Self {
        Self {
            identity: TypeIdentity::of::<T>(),
            value: Box::new(value),
        }
    }

    pub(crate) fn identity(&self) -> TypeIdentity {
        self.identity
    }

    /// Check if the contained value is of type T
    pub(crate) fn is<T: Any>(&self) -> bool {
        self.identity.is::<T>()
    }

    /// Get a reference to the contained value if it is of type T
    pub(crate) fn downcast_ref<T: Any>(&self) -> Option<&T> {
        if !self.is::<T>() {
            return None;
        }
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for ErasedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.identity.name())
    }
}
