//! Create-by-key facade over a family's process-wide registry.

use std::fmt::Display;
use std::hash::Hash;
use std::marker::PhantomData;

use indexmap::Equivalent;

use crate::error::{FactoryError, Result};
use crate::family::{Construct, Family};
use crate::key::TypeKey;
use crate::meta::ClassInfo;
use crate::registrar::Registrar;
use crate::registry::{Constructor, Entry, InsertAction};

/// Facade for family `F`.
///
/// All operations go through [`Family::registry`], so the first call of any of
/// them populates the registry from inventory.
pub struct Factory<F: Family>(PhantomData<fn() -> F>);

impl<F: Family> Factory<F> {
	/// Creates a new instance of the class registered under `key`.
	///
	/// The constructor runs outside the registry lock; the returned box is owned
	/// by the caller and the registry keeps no reference to it.
	pub fn create<Q>(key: &Q, args: F::Args) -> Result<Box<F::Interface>>
	where
		Q: ?Sized + Hash + Equivalent<F::Key> + Display,
	{
		let Some(constructor) = F::registry().lookup(key) else {
			tracing::debug!(family = F::LABEL, %key, "create: no class registered");
			return Err(FactoryError::KeyNotFound {
				family: F::LABEL,
				key: key.to_string(),
			});
		};
		tracing::trace!(family = F::LABEL, %key, "create");
		Ok(constructor.call(args))
	}

	/// Registers `T` under its default key.
	pub fn reg<T>() -> Result<InsertAction>
	where
		T: TypeKey<F::Key> + Construct<F> + 'static,
	{
		Registrar::<F>::of::<T>().register(F::registry())
	}

	/// Registers `T` under `key`, independent of its default key.
	pub fn reg_as<T>(key: impl Into<F::Key>) -> Result<InsertAction>
	where
		T: TypeKey<F::Key> + Construct<F> + 'static,
	{
		Registrar::<F>::of::<T>().register_as(F::registry(), key.into())
	}

	/// Registers an arbitrary constructor under `key`.
	pub fn reg_fn<C>(key: impl Into<F::Key>, constructor: C) -> Result<InsertAction>
	where
		C: Fn(F::Args) -> Box<F::Interface> + Send + Sync + 'static,
	{
		let info = ClassInfo::runtime::<C>();
		F::registry().insert(key.into(), Entry::new(Constructor::new(constructor), info))
	}

	/// Removes `key`. Unknown keys are ignored; returns whether anything was removed.
	pub fn unreg<Q>(key: &Q) -> bool
	where
		Q: ?Sized + Hash + Equivalent<F::Key>,
	{
		F::registry().remove(key)
	}

	/// Removes `T`'s default key. Custom keys `T` was registered under stay.
	pub fn unreg_type<T>() -> bool
	where
		T: TypeKey<F::Key>,
	{
		F::registry().remove(&T::type_key())
	}

	/// Returns true if `key` is registered.
	pub fn exists<Q>(key: &Q) -> bool
	where
		Q: ?Sized + Hash + Equivalent<F::Key>,
	{
		F::registry().contains(key)
	}

	/// Returns true if `T`'s default key is registered.
	pub fn exists_type<T>() -> bool
	where
		T: TypeKey<F::Key>,
	{
		F::registry().contains(&T::type_key())
	}

	/// Lists every registered key with its metadata, in insertion order.
	pub fn classes() -> Vec<(F::Key, ClassInfo)> {
		F::registry().entries()
	}

	/// Returns the number of registered keys.
	pub fn len() -> usize {
		F::registry().len()
	}

	/// Returns true if nothing is registered.
	pub fn is_empty() -> bool {
		F::registry().is_empty()
	}

	/// Populates the registry now rather than on first use.
	///
	/// Returns the number of registered keys.
	pub fn init() -> usize {
		let count = F::registry().len();
		tracing::debug!(family = F::LABEL, count, "factory initialized");
		count
	}
}
