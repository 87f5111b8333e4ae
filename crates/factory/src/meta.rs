//! Metadata reported for each registered key.

use std::any::TypeId;

/// Where a registration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrySource {
	/// Submitted through [`register!`](crate::register) in the named crate.
	Crate(&'static str),
	/// Registered by a facade or registrar call at runtime.
	Runtime,
}

impl core::fmt::Display for RegistrySource {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Crate(name) => write!(f, "crate:{name}"),
			Self::Runtime => write!(f, "runtime"),
		}
	}
}

/// Description of the class behind a registered key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassInfo {
	/// Identity of the concrete type (or constructor closure) producing instances.
	pub type_id: TypeId,
	/// Name of that type, for display only.
	pub type_name: &'static str,
	/// Origin of the registration.
	pub source: RegistrySource,
	/// True when the key differs from the type's own default key.
	pub custom: bool,
}

impl ClassInfo {
	/// Metadata for a runtime registration of constructor type `C`.
	pub fn runtime<C: 'static>() -> Self {
		Self {
			type_id: TypeId::of::<C>(),
			type_name: std::any::type_name::<C>(),
			source: RegistrySource::Runtime,
			custom: false,
		}
	}
}
