//! Bindable values.
//!
//! - [`Value`]: tagged union of every value a statement can bind
//! - [`IntoValue`]: conversion trait used by condition and mapping builders
//! - [`Values`]: ordered list of values, as handed to positional drivers

mod core;

pub use self::core::Value;

/// Conversion into a bindable [`Value`].
///
/// Implemented for the primitive types, strings, byte vectors and `Option`
/// of each (where `None` becomes SQL `NULL`).
pub trait IntoValue {
	/// Convert into a [`Value`].
	fn into_value(self) -> Value;
}

impl IntoValue for Value {
	fn into_value(self) -> Value {
		self
	}
}

macro_rules! impl_into_value {
	($ty:ty, $variant:ident) => {
		impl IntoValue for $ty {
			fn into_value(self) -> Value {
				Value::$variant(Some(self))
			}
		}

		impl IntoValue for Option<$ty> {
			fn into_value(self) -> Value {
				Value::$variant(self)
			}
		}

		impl From<$ty> for Value {
			fn from(v: $ty) -> Self {
				v.into_value()
			}
		}

		impl From<Option<$ty>> for Value {
			fn from(v: Option<$ty>) -> Self {
				v.into_value()
			}
		}
	};
}

impl_into_value!(bool, Bool);
impl_into_value!(i8, TinyInt);
impl_into_value!(i16, SmallInt);
impl_into_value!(i32, Int);
impl_into_value!(i64, BigInt);
impl_into_value!(u64, BigUnsigned);
impl_into_value!(f32, Float);
impl_into_value!(f64, Double);
impl_into_value!(char, Char);

impl IntoValue for String {
	fn into_value(self) -> Value {
		Value::String(Some(Box::new(self)))
	}
}

impl IntoValue for Option<String> {
	fn into_value(self) -> Value {
		Value::String(self.map(Box::new))
	}
}

impl IntoValue for &str {
	fn into_value(self) -> Value {
		Value::String(Some(Box::new(self.to_string())))
	}
}

impl IntoValue for Option<&str> {
	fn into_value(self) -> Value {
		Value::String(self.map(|s| Box::new(s.to_string())))
	}
}

impl IntoValue for Vec<u8> {
	fn into_value(self) -> Value {
		Value::Bytes(Some(Box::new(self)))
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		v.into_value()
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		v.into_value()
	}
}

impl From<Vec<u8>> for Value {
	fn from(v: Vec<u8>) -> Self {
		v.into_value()
	}
}

#[cfg(feature = "with-chrono")]
impl IntoValue for chrono::NaiveDate {
	fn into_value(self) -> Value {
		Value::ChronoDate(Some(Box::new(self)))
	}
}

#[cfg(feature = "with-chrono")]
impl IntoValue for chrono::NaiveDateTime {
	fn into_value(self) -> Value {
		Value::ChronoDateTime(Some(Box::new(self)))
	}
}

#[cfg(feature = "with-chrono")]
impl IntoValue for chrono::DateTime<chrono::Utc> {
	fn into_value(self) -> Value {
		Value::ChronoDateTimeUtc(Some(Box::new(self)))
	}
}

#[cfg(feature = "with-uuid")]
impl IntoValue for uuid::Uuid {
	fn into_value(self) -> Value {
		Value::Uuid(Some(Box::new(self)))
	}
}

#[cfg(feature = "with-json")]
impl IntoValue for serde_json::Value {
	fn into_value(self) -> Value {
		Value::Json(Some(Box::new(self)))
	}
}

/// Ordered collection of bound values.
///
/// Produced by [`Parameters::to_values`](crate::render::Parameters::to_values)
/// for drivers that bind positionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values(pub Vec<Value>);

impl Values {
	/// Create an empty collection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a value.
	pub fn push(&mut self, value: Value) {
		self.0.push(value);
	}

	/// Number of values.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when there are no values.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterate over the values in order.
	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.0.iter()
	}
}

impl IntoIterator for Values {
	type Item = Value;
	type IntoIter = std::vec::IntoIter<Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl FromIterator<Value> for Values {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}
