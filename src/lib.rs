//! # sovran-propset
//!
//! Type-safe holders for heterogeneous values.
//!
//! `sovran-propset` provides two independent primitives:
//!
//! - [`PropertySet`]: a keyed container where every entry may hold a value of a
//!   different, unrelated type. Values are only returned when asked for with the
//!   exact type they were stored with.
//! - [`Variant`]: a closed tagged union over the fixed-width integers, `f32`,
//!   `f64`, `String` and [`WideString`], with a [`Visitor`] protocol and the
//!   [`VariantValue`] projection for type-safe extraction.
//!
//! ## Key Features
//!
//! - **Type-safe**: a wrong-type lookup reports absence, never a reinterpreted value
//! - **Owned**: containers own their values exclusively, no reference counting
//! - **Closed set**: storing an unsupported type in a `Variant` fails to compile
//! - **No coercion**: an `i64` is never handed out as an `i32`
//! - **Optional logging**: enable the `logging` feature to trace type changes
//!
//! ## Usage Examples
//!
//! ### Property Sets
//!
//! ```rust
//! use sovran_propset::PropertySet;
//!
//! let mut properties = PropertySet::<String>::new();
//!
//! // Store values of different types
//! properties.set("distance".to_string(), 123.456f64);
//! properties.set("flat".to_string(), 789i32);
//! properties.set("city_name".to_string(), "Stockholm".to_string());
//! properties.set("string_array".to_string(), vec!["hello".to_string(), "world".to_string()]);
//!
//! // Retrieve values in a type-safe way
//! assert_eq!(properties.get::<f64>(&"distance".to_string()), Some(&123.456));
//! assert_eq!(properties.get::<bool>(&"flat".to_string()), None);
//! assert!(properties.is::<String>(&"city_name".to_string()));
//! assert!(properties.has(&"string_array".to_string()));
//!
//! // Overwriting may change the stored type
//! properties.set("flat".to_string(), true);
//! assert_eq!(properties.get::<i32>(&"flat".to_string()), None);
//! assert_eq!(properties.get::<bool>(&"flat".to_string()), Some(&true));
//! ```
//!
//! ### Error Handling
//!
//! [`PropertySet::get`] reports a missing key and a wrong type the same way.
//! Use [`PropertySet::try_get`] to tell them apart.
//!
//! ```rust
//! use sovran_propset::{PropertyError, PropertySet};
//!
//! let mut properties = PropertySet::<&str>::new();
//! properties.set("config", vec!["setting1", "setting2"]);
//!
//! match properties.try_get::<String>(&"config") {
//!     Ok(value) => println!("Config: {}", value),
//!     Err(PropertyError::KeyNotFound(_)) => println!("Config key not found"),
//!     Err(PropertyError::TypeMismatch { found, .. }) => println!("Config is a {}", found),
//! }
//!
//! assert!(matches!(
//!     properties.try_get::<i32>(&"settings"),
//!     Err(PropertyError::KeyNotFound(_))
//! ));
//! ```
//!
//! ### Variants
//!
//! ```rust
//! use sovran_propset::{Variant, VariantType, VariantValue, Visitor};
//!
//! let mut v = Variant::from(12i8);
//! assert_eq!(v.variant_type(), VariantType::Int8);
//!
//! v.set("text");
//! assert_eq!(v.variant_type(), VariantType::String);
//!
//! // Pattern matching
//! if let Variant::String(text) = &v {
//!     assert_eq!(text, "text");
//! }
//!
//! // Projection onto a single type
//! let text = VariantValue::<String>::from(&v);
//! assert!(text.is_valid());
//! assert!(!VariantValue::<i8>::from(&v).is_valid());
//!
//! // Visitors see the live value by its exact type
//! struct Length(usize);
//!
//! impl Visitor for Length {
//!     fn visit_string(&mut self, value: &String) {
//!         self.0 = value.len();
//!     }
//! }
//!
//! let mut length = Length(0);
//! assert!(v.visit(&mut length));
//! assert_eq!(length.0, 4);
//!
//! v.clear();
//! assert_eq!(v.variant_type(), VariantType::Empty);
//! assert!(!v.visit(&mut length));
//! ```

mod erased;
mod error;
mod property_set;
mod type_identity;
mod variant;
mod variant_value;
mod wide;

pub use error::{PropertyError, VariantError};
pub use property_set::PropertySet;
pub use type_identity::{identity_of, TypeIdentity};
pub use variant::{Alternative, Assign, Variant, VariantType, Visitor};
pub use variant_value::VariantValue;
pub use wide::WideString;
