use crate::error::VariantError;
use crate::wide::WideString;
use std::fmt;

/// The discriminant of a [`Variant`]: which alternative, if any, is live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantType {
    Empty,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float,
    Double,
    String,
    WString,
}

impl VariantType {
    /// Returns true for the alternatives that own heap storage
    pub fn is_string(self) -> bool {
        matches!(self, VariantType::String | VariantType::WString)
    }
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VariantType::Empty => "empty",
            VariantType::Int8 => "int8",
            VariantType::UInt8 => "uint8",
            VariantType::Int16 => "int16",
            VariantType::UInt16 => "uint16",
            VariantType::Int32 => "int32",
            VariantType::UInt32 => "uint32",
            VariantType::Int64 => "int64",
            VariantType::UInt64 => "uint64",
            VariantType::Float => "float",
            VariantType::Double => "double",
            VariantType::String => "string",
            VariantType::WString => "wstring",
        };
        f.write_str(name)
    }
}

/// A value holding at most one of a closed set of scalar and string types.
///
/// A `Variant` starts out [`Empty`](Variant::Empty) and changes alternative
/// through [`set`](Variant::set), assignment, [`take`](Variant::take) and
/// [`clear`](Variant::clear). Only the types implementing [`Assign`] can be
/// stored; anything else is rejected at compile time.
///
/// # Examples
///
/// ```
/// use sovran_propset::{Variant, VariantType};
///
/// let mut v = Variant::from(12i8);
/// assert_eq!(v.variant_type(), VariantType::Int8);
///
/// v.set("text");
/// assert_eq!(v.variant_type(), VariantType::String);
/// assert_eq!(v.get::<String>().map(String::as_str), Some("text"));
///
/// v.clear();
/// assert_eq!(v.variant_type(), VariantType::Empty);
/// ```
#[derive(Debug, Default, PartialEq)]
pub enum Variant {
    #[default]
    Empty,
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    WString(WideString),
}

/// Receives the live value of a [`Variant`] by its exact type.
///
/// [`Variant::visit`] calls exactly one of these methods for a non-empty
/// variant. Every method defaults to doing nothing, so a visitor only needs to
/// implement the alternatives it cares about.
///
/// ```
/// use sovran_propset::{Variant, Visitor};
///
/// #[derive(Default)]
/// struct Widest(Option<i64>);
///
/// impl Visitor for Widest {
///     fn visit_i32(&mut self, value: i32) {
///         self.0 = Some(value.into());
///     }
///     fn visit_i64(&mut self, value: i64) {
///         self.0 = Some(value);
///     }
/// }
///
/// let mut widest = Widest::default();
/// assert!(Variant::from(-7i32).visit(&mut widest));
/// assert_eq!(widest.0, Some(-7));
/// ```
pub trait Visitor {
    fn visit_i8(&mut self, _value: i8) {}
    fn visit_u8(&mut self, _value: u8) {}
    fn visit_i16(&mut self, _value: i16) {}
    fn visit_u16(&mut self, _value: u16) {}
    fn visit_i32(&mut self, _value: i32) {}
    fn visit_u32(&mut self, _value: u32) {}
    fn visit_i64(&mut self, _value: i64) {}
    fn visit_u64(&mut self, _value: u64) {}
    fn visit_f32(&mut self, _value: f32) {}
    fn visit_f64(&mut self, _value: f64) {}
    #[allow(clippy::ptr_arg)]
    fn visit_string(&mut self, _value: &String) {}
    fn visit_wstring(&mut self, _value: &WideString) {}
}

mod sealed {
    pub trait Sealed {}
}

/// One of the twelve types a [`Variant`] can hold
pub trait Alternative: sealed::Sealed + Sized + 'static {
    /// The discriminant reported while this type is live
    const TYPE: VariantType;

    /// Borrows the live value if the variant currently holds `Self`
    fn project(variant: &Variant) -> Option<&Self>;
}

/// A value that can be stored into a [`Variant`] with [`Variant::set`]
pub trait Assign: sealed::Sealed {
    fn assign(self, target: &mut Variant);
}

macro_rules! scalar_alternatives {
    ($($ty:ty => $arm:ident, $tag:ident;)*) => {$(
        impl sealed::Sealed for $ty {}

        impl Alternative for $ty {
            const TYPE: VariantType = VariantType::$tag;

            fn project(variant: &Variant) -> Option<&Self> {
                match variant {
                    Variant::$arm(value) => Some(value),
                    _ => None,
                }
            }
        }

        impl Assign for $ty {
            fn assign(self, target: &mut Variant) {
                *target = Variant::$arm(self);
            }
        }

        impl From<$ty> for Variant {
            fn from(value: $ty) -> Self {
                Variant::$arm(value)
            }
        }

        impl TryFrom<&Variant> for $ty {
            type Error = VariantError;

            fn try_from(variant: &Variant) -> Result<Self, Self::Error> {
                variant.try_get::<$ty>().copied()
            }
        }
    )*};
}

scalar_alternatives! {
    i8 => I8, Int8;
    u8 => U8, UInt8;
    i16 => I16, Int16;
    u16 => U16, UInt16;
    i32 => I32, Int32;
    u32 => U32, UInt32;
    i64 => I64, Int64;
    u64 => U64, UInt64;
    f32 => F32, Float;
    f64 => F64, Double;
}

impl sealed::Sealed for String {}
impl sealed::Sealed for WideString {}
impl sealed::Sealed for &str {}
impl sealed::Sealed for &String {}
impl sealed::Sealed for &WideString {}

impl Alternative for String {
    const TYPE: VariantType = VariantType::String;

    fn project(variant: &Variant) -> Option<&Self> {
        match variant {
            Variant::String(value) => Some(value),
            _ => None,
        }
    }
}

impl Alternative for WideString {
    const TYPE: VariantType = VariantType::WString;

    fn project(variant: &Variant) -> Option<&Self> {
        match variant {
            Variant::WString(value) => Some(value),
            _ => None,
        }
    }
}

// Owned strings are moved in. Borrowed strings are copied into the existing
// buffer when the variant already holds the same alternative.

impl Assign for String {
    fn assign(self, target: &mut Variant) {
        match target {
            Variant::String(current) => *current = self,
            _ => *target = Variant::String(self),
        }
    }
}

impl Assign for &str {
    fn assign(self, target: &mut Variant) {
        match target {
            Variant::String(current) => {
                current.clear();
                current.push_str(self);
            }
            _ => *target = Variant::String(self.to_owned()),
        }
    }
}

impl Assign for &String {
    fn assign(self, target: &mut Variant) {
        self.as_str().assign(target);
    }
}

impl Assign for WideString {
    fn assign(self, target: &mut Variant) {
        match target {
            Variant::WString(current) => *current = self,
            _ => *target = Variant::WString(self),
        }
    }
}

impl Assign for &WideString {
    fn assign(self, target: &mut Variant) {
        match target {
            Variant::WString(current) => current.clone_from(self),
            _ => *target = Variant::WString(self.clone()),
        }
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::String(value)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::String(value.to_owned())
    }
}

impl From<&String> for Variant {
    fn from(value: &String) -> Self {
        Variant::String(value.clone())
    }
}

impl From<WideString> for Variant {
    fn from(value: WideString) -> Self {
        Variant::WString(value)
    }
}

impl From<&WideString> for Variant {
    fn from(value: &WideString) -> Self {
        Variant::WString(value.clone())
    }
}

impl TryFrom<&Variant> for String {
    type Error = VariantError;

    fn try_from(variant: &Variant) -> Result<Self, Self::Error> {
        variant.try_get::<String>().cloned()
    }
}

impl TryFrom<&Variant> for WideString {
    type Error = VariantError;

    fn try_from(variant: &Variant) -> Result<Self, Self::Error> {
        variant.try_get::<WideString>().cloned()
    }
}

impl Variant {
    /// Creates an empty variant
    pub fn new() -> Self {
        Variant::Empty
    }

    /// Returns the discriminant of the live alternative
    pub fn variant_type(&self) -> VariantType {
        match self {
            Variant::Empty => VariantType::Empty,
            Variant::I8(_) => VariantType::Int8,
            Variant::U8(_) => VariantType::UInt8,
            Variant::I16(_) => VariantType::Int16,
            Variant::U16(_) => VariantType::UInt16,
            Variant::I32(_) => VariantType::Int32,
            Variant::U32(_) => VariantType::UInt32,
            Variant::I64(_) => VariantType::Int64,
            Variant::U64(_) => VariantType::UInt64,
            Variant::F32(_) => VariantType::Float,
            Variant::F64(_) => VariantType::Double,
            Variant::String(_) => VariantType::String,
            Variant::WString(_) => VariantType::WString,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Variant::Empty)
    }

    /// Replaces the current value with `value`.
    ///
    /// Any previous alternative is dropped first. Assigning a borrowed string
    /// to a variant that already holds a string reuses its buffer.
    pub fn set<V: Assign>(&mut self, value: V) {
        value.assign(self);
    }

    /// Drops the live value, leaving the variant empty
    pub fn clear(&mut self) {
        #[cfg(feature = "logging")]
        self.trace_release("clearing");
        *self = Variant::Empty;
    }

    /// Moves the value out, always leaving this variant empty.
    ///
    /// Scalars are emptied too, so a moved-from variant never appears to
    /// still hold its old value.
    ///
    /// ```
    /// use sovran_propset::Variant;
    ///
    /// let mut source = Variant::from(5u16);
    /// let target = source.take();
    /// assert!(source.is_empty());
    /// assert_eq!(target, Variant::U16(5));
    /// ```
    pub fn take(&mut self) -> Variant {
        #[cfg(feature = "logging")]
        self.trace_release("moving out");
        std::mem::take(self)
    }

    pub fn swap(&mut self, other: &mut Variant) {
        std::mem::swap(self, other);
    }

    /// Calls the visitor method matching the live alternative.
    ///
    /// Returns `false` without calling anything when the variant is empty.
    pub fn visit<V: Visitor + ?Sized>(&self, visitor: &mut V) -> bool {
        match self {
            Variant::Empty => return false,
            Variant::I8(value) => visitor.visit_i8(*value),
            Variant::U8(value) => visitor.visit_u8(*value),
            Variant::I16(value) => visitor.visit_i16(*value),
            Variant::U16(value) => visitor.visit_u16(*value),
            Variant::I32(value) => visitor.visit_i32(*value),
            Variant::U32(value) => visitor.visit_u32(*value),
            Variant::I64(value) => visitor.visit_i64(*value),
            Variant::U64(value) => visitor.visit_u64(*value),
            Variant::F32(value) => visitor.visit_f32(*value),
            Variant::F64(value) => visitor.visit_f64(*value),
            Variant::String(value) => visitor.visit_string(value),
            Variant::WString(value) => visitor.visit_wstring(value),
        }
        true
    }

    /// Returns true if the live alternative is exactly `T`
    pub fn is<T: Alternative>(&self) -> bool {
        T::project(self).is_some()
    }

    /// Borrows the live value if it is exactly `T`. No numeric conversion
    /// takes place: an `i64` variant yields `None` for `i32`.
    pub fn get<T: Alternative>(&self) -> Option<&T> {
        T::project(self)
    }

    /// Like [`get`](Variant::get), reporting why the value was not available
    pub fn try_get<T: Alternative>(&self) -> Result<&T, VariantError> {
        match T::project(self) {
            Some(value) => Ok(value),
            None if self.is_empty() => Err(VariantError::Empty),
            None => Err(VariantError::TypeMismatch {
                expected: T::TYPE,
                found: self.variant_type(),
            }),
        }
    }

    #[cfg(feature = "logging")]
    fn trace_release(&self, action: &str) {
        if self.variant_type().is_string() {
            log::trace!("{} variant holding {} storage", action, self.variant_type());
        }
    }
}

impl Clone for Variant {
    fn clone(&self) -> Self {
        let mut copy = Variant::Empty;
        copy.clone_from(self);
        copy
    }

    /// Copies `source`, reusing this variant's string buffer when both hold the
    /// same string alternative
    fn clone_from(&mut self, source: &Self) {
        match source {
            Variant::String(value) => self.set(value),
            Variant::WString(value) => self.set(value),
            Variant::Empty => self.clear(),
            Variant::I8(value) => self.set(*value),
            Variant::U8(value) => self.set(*value),
            Variant::I16(value) => self.set(*value),
            Variant::U16(value) => self.set(*value),
            Variant::I32(value) => self.set(*value),
            Variant::U32(value) => self.set(*value),
            Variant::I64(value) => self.set(*value),
            Variant::U64(value) => self.set(*value),
            Variant::F32(value) => self.set(*value),
            Variant::F64(value) => self.set(*value),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Empty => Ok(()),
            Variant::I8(value) => write!(f, "{}", value),
            Variant::U8(value) => write!(f, "{}", value),
            Variant::I16(value) => write!(f, "{}", value),
            Variant::U16(value) => write!(f, "{}", value),
            Variant::I32(value) => write!(f, "{}", value),
            Variant::U32(value) => write!(f, "{}", value),
            Variant::I64(value) => write!(f, "{}", value),
            Variant::U64(value) => write!(f, "{}", value),
            Variant::F32(value) => write!(f, "{}", value),
            Variant::F64(value) => write!(f, "{}", value),
            Variant::String(value) => f.write_str(value),
            Variant::WString(value) => write!(f, "{}", value),
        }
    }
}
