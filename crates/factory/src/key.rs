//! Key contract consumed from each family.
//!
//! A family's keys are plain values. The core needs exactly two things from a
//! concrete type: its default key without an instance ([`TypeKey`]) and the
//! key a live instance reports ([`Keyed`]). [`type_key!`](crate::type_key)
//! implements both from one constant.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Bound satisfied by every value usable as a registry key.
///
/// `&'static str`, `String` and `char` all qualify.
pub trait RegistryKey:
	Clone + Eq + Ord + Hash + Debug + Display + Send + Sync + 'static
{
}

impl<K> RegistryKey for K where
	K: Clone + Eq + Ord + Hash + Debug + Display + Send + Sync + 'static
{
}

/// Default key of a concrete type, available without an instance.
pub trait TypeKey<K> {
	/// Returns the key this type registers under unless told otherwise.
	fn type_key() -> K;
}

/// Key reported by a live instance.
///
/// Family interfaces carry this as a supertrait so `Box<dyn Interface>` can
/// answer it.
pub trait Keyed<K> {
	/// Returns the instance's key.
	fn key(&self) -> K;
}

/// Implements [`TypeKey`] and [`Keyed`] for a type from a single key value.
///
/// ```rust,ignore
/// type_key!(Circle, &'static str = "circle");
/// type_key!(Glyph, char = 'g');
/// ```
#[macro_export]
macro_rules! type_key {
	($ty:ty, $key_ty:ty = $key:expr) => {
		impl $crate::TypeKey<$key_ty> for $ty {
			fn type_key() -> $key_ty {
				$key
			}
		}

		impl $crate::Keyed<$key_ty> for $ty {
			fn key(&self) -> $key_ty {
				<$ty as $crate::TypeKey<$key_ty>>::type_key()
			}
		}
	};
}
