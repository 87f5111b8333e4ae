//! Per-type registration adapter.

use std::any::TypeId;

use crate::error::Result;
use crate::family::{Construct, Family};
use crate::key::TypeKey;
use crate::meta::{ClassInfo, RegistrySource};
use crate::registry::{Constructor, Entry, InsertAction, Registry};

/// Binds one concrete type's default key to its constructor.
///
/// Registrars are inert values: building one registers nothing. They are
/// either submitted to inventory by [`register!`](crate::register) and drained
/// when the family's registry is first touched, or built on the fly by the
/// [`Factory`](crate::Factory) facade.
pub struct Registrar<F: Family> {
	key: fn() -> F::Key,
	construct: fn(F::Args) -> Box<F::Interface>,
	type_id: fn() -> TypeId,
	type_name: fn() -> &'static str,
	crate_name: &'static str,
}

impl<F: Family> Registrar<F> {
	/// Creates the registrar for `T`.
	pub const fn of<T>() -> Self
	where
		T: TypeKey<F::Key> + Construct<F> + 'static,
	{
		Self {
			key: <T as TypeKey<F::Key>>::type_key,
			construct: <T as Construct<F>>::construct,
			type_id: TypeId::of::<T>,
			type_name: std::any::type_name::<T>,
			crate_name: "",
		}
	}

	/// Marks the registrar as submitted from `crate_name`.
	pub const fn in_crate(self, crate_name: &'static str) -> Self {
		Self { crate_name, ..self }
	}

	/// Returns the type's default key.
	pub fn key(&self) -> F::Key {
		(self.key)()
	}

	/// Returns the concrete type's identity.
	pub fn type_id(&self) -> TypeId {
		(self.type_id)()
	}

	/// Returns the concrete type name.
	pub fn type_name(&self) -> &'static str {
		(self.type_name)()
	}

	/// Returns the submitting crate, empty for runtime registrars.
	pub fn crate_name(&self) -> &'static str {
		self.crate_name
	}

	/// Returns where registrations made by this registrar come from.
	pub fn source(&self) -> RegistrySource {
		if self.crate_name.is_empty() {
			RegistrySource::Runtime
		} else {
			RegistrySource::Crate(self.crate_name)
		}
	}

	/// Builds the constructor entry this registrar inserts under `key`.
	pub fn entry(&self, key: &F::Key) -> Entry<F> {
		let info = ClassInfo {
			type_id: self.type_id(),
			type_name: self.type_name(),
			source: self.source(),
			custom: *key != self.key(),
		};
		Entry::new(Constructor::new(self.construct), info)
	}

	/// Inserts the type under its default key.
	pub fn register(&self, registry: &Registry<F>) -> Result<InsertAction> {
		self.register_as(registry, self.key())
	}

	/// Inserts the type under an explicit key.
	pub fn register_as(&self, registry: &Registry<F>, key: F::Key) -> Result<InsertAction> {
		let entry = self.entry(&key);
		registry.insert(key, entry)
	}

	/// Removes the type's default key. Custom keys are left alone.
	pub fn unregister(&self, registry: &Registry<F>) -> bool {
		registry.remove(&self.key())
	}
}

impl<F: Family> Clone for Registrar<F> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<F: Family> Copy for Registrar<F> {}

impl<F: Family> core::fmt::Debug for Registrar<F> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Registrar")
			.field("family", &F::LABEL)
			.field("key", &self.key())
			.field("type_name", &self.type_name())
			.finish()
	}
}
