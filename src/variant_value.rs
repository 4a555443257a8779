use crate::variant::{Alternative, Variant, Visitor};
use crate::wide::WideString;
use std::any::Any;

/// The value of a [`Variant`] projected onto a single type `T`.
///
/// A `VariantValue` is valid only when the variant held exactly `T` at the
/// time of extraction. There is no numeric widening or narrowing: extracting an
/// `i32` from a variant holding an `i64` gives an invalid value.
///
/// [`get`](VariantValue::get) returns the stored `T` unconditionally. When the
/// projection is invalid that is just `T::default()`, so check
/// [`is_valid`](VariantValue::is_valid) first or use
/// [`value`](VariantValue::value).
///
/// # Examples
///
/// ```
/// use sovran_propset::{Variant, VariantValue, WideString};
///
/// let narrow = Variant::from("Stockholm");
/// let city = VariantValue::<String>::from(&narrow);
/// assert!(city.is_valid());
/// assert_eq!(city.get(), "Stockholm");
///
/// let wide = Variant::from(WideString::from("Stockholm"));
/// let city = VariantValue::<String>::from(&wide);
/// assert!(!city.is_valid());
/// assert_eq!(city.value(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantValue<T> {
    value: T,
    valid: bool,
}

/// Stores the visited value into the destination only when its type is exactly `T`
struct Getter<'a, T> {
    value: &'a mut T,
    valid: &'a mut bool,
}

impl<T: Clone + 'static> Getter<'_, T> {
    fn offer<U: Any>(&mut self, candidate: &U) {
        if let Some(matched) = (candidate as &dyn Any).downcast_ref::<T>() {
            self.value.clone_from(matched);
            *self.valid = true;
        }
    }
}

impl<T: Clone + 'static> Visitor for Getter<'_, T> {
    fn visit_i8(&mut self, value: i8) {
        self.offer(&value);
    }
    fn visit_u8(&mut self, value: u8) {
        self.offer(&value);
    }
    fn visit_i16(&mut self, value: i16) {
        self.offer(&value);
    }
    fn visit_u16(&mut self, value: u16) {
        self.offer(&value);
    }
    fn visit_i32(&mut self, value: i32) {
        self.offer(&value);
    }
    fn visit_u32(&mut self, value: u32) {
        self.offer(&value);
    }
    fn visit_i64(&mut self, value: i64) {
        self.offer(&value);
    }
    fn visit_u64(&mut self, value: u64) {
        self.offer(&value);
    }
    fn visit_f32(&mut self, value: f32) {
        self.offer(&value);
    }
    fn visit_f64(&mut self, value: f64) {
        self.offer(&value);
    }
    fn visit_string(&mut self, value: &String) {
        self.offer(value);
    }
    fn visit_wstring(&mut self, value: &WideString) {
        self.offer(value);
    }
}

impl<T> VariantValue<T>
where
    T: Alternative + Clone + Default,
{
    /// Creates an invalid value
    pub fn new() -> Self {
        Self {
            value: T::default(),
            valid: false,
        }
    }

    /// Extracts `T` from `variant`
    pub fn from_variant(variant: &Variant) -> Self {
        let mut extracted = Self::new();
        extracted.assign(variant);
        extracted
    }

    /// Re-extracts from `variant`, resetting to an invalid default value when
    /// the variant does not hold `T`
    pub fn assign(&mut self, variant: &Variant) {
        let mut valid = false;
        let mut getter = Getter {
            value: &mut self.value,
            valid: &mut valid,
        };
        variant.visit(&mut getter);
        if !valid {
            self.value = T::default();
        }
        self.valid = valid;
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the stored value whether or not it is valid
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns the value only if the extraction succeeded
    pub fn value(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    pub fn into_inner(self) -> Option<T> {
        self.valid.then_some(self.value)
    }
}

impl<T> From<&Variant> for VariantValue<T>
where
    T: Alternative + Clone + Default,
{
    fn from(variant: &Variant) -> Self {
        Self::from_variant(variant)
    }
}
