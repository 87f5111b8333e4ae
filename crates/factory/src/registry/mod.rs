//! Key to constructor mapping for one family.
//!
//! # Invariants
//!
//! - Every key maps to exactly one [`Entry`].
//! - [`Registry::entries`] yields keys in insertion order; replacing an entry
//!   keeps its slot, removing one keeps the order of the rest.
//! - All access goes through one `RwLock`. Constructors are cloned out of the
//!   lock before they run, so a constructor may call back into the registry.

mod collision;

use std::hash::Hash;
use std::sync::Arc;

use indexmap::{Equivalent, IndexMap};
use parking_lot::RwLock;

pub use collision::{Collision, DuplicatePolicy, InsertAction};

use crate::error::{FactoryError, Result};
use crate::family::{Family, RegistryReg};
use crate::meta::ClassInfo;
use crate::registrar::Registrar;

#[cfg(test)]
mod tests;

/// Shared constructor for one registered class.
pub struct Constructor<F: Family>(Arc<dyn Fn(F::Args) -> Box<F::Interface> + Send + Sync>);

impl<F: Family> Constructor<F> {
	/// Wraps a constructor function or closure.
	pub fn new(f: impl Fn(F::Args) -> Box<F::Interface> + Send + Sync + 'static) -> Self {
		Self(Arc::new(f))
	}

	/// Builds a new instance.
	pub fn call(&self, args: F::Args) -> Box<F::Interface> {
		(self.0)(args)
	}
}

impl<F: Family> Clone for Constructor<F> {
	fn clone(&self) -> Self {
		Self(Arc::clone(&self.0))
	}
}

impl<F: Family> core::fmt::Debug for Constructor<F> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_tuple("Constructor").field(&F::LABEL).finish()
	}
}

/// A constructor plus the metadata reported for its key.
pub struct Entry<F: Family> {
	constructor: Constructor<F>,
	info: ClassInfo,
}

impl<F: Family> Entry<F> {
	/// Creates an entry.
	pub fn new(constructor: Constructor<F>, info: ClassInfo) -> Self {
		Self { constructor, info }
	}

	/// Returns the class metadata.
	pub fn info(&self) -> ClassInfo {
		self.info
	}
}

struct RegistryState<F: Family> {
	entries: IndexMap<F::Key, Entry<F>>,
	collisions: Vec<Collision<F::Key>>,
}

/// Key to constructor mapping for family `F`.
pub struct Registry<F: Family> {
	label: &'static str,
	policy: DuplicatePolicy,
	state: RwLock<RegistryState<F>>,
}

impl<F: Family> Registry<F> {
	/// Creates an empty registry.
	pub fn new(label: &'static str, policy: DuplicatePolicy) -> Self {
		Self {
			label,
			policy,
			state: RwLock::new(RegistryState {
				entries: IndexMap::new(),
				collisions: Vec::new(),
			}),
		}
	}

	/// Creates the family's registry from every registrar submitted with
	/// [`register!`](crate::register).
	///
	/// Submissions are sorted by key, then type name, before insertion so the
	/// result does not depend on link order.
	pub fn from_inventory() -> Self
	where
		inventory::iter<F::Reg>: IntoIterator<Item = &'static F::Reg>,
	{
		Self::with_registrars(inventory::iter::<F::Reg>.into_iter().map(|reg| reg.registrar()))
	}

	/// Creates the family's registry from an explicit list of registrars.
	pub fn with_registrars<'a>(registrars: impl IntoIterator<Item = &'a Registrar<F>>) -> Self {
		let registry = Self::new(F::LABEL, F::POLICY);

		let mut pending: Vec<(F::Key, &Registrar<F>)> =
			registrars.into_iter().map(|r| (r.key(), r)).collect();
		pending.sort_by(|(a, ra), (b, rb)| a.cmp(b).then_with(|| ra.type_name().cmp(rb.type_name())));

		for (key, registrar) in pending {
			if let Err(e) = registrar.register_as(&registry, key) {
				tracing::warn!(registry = registry.label, error = %e, "startup registration rejected");
			}
		}

		tracing::debug!(registry = registry.label, count = registry.len(), "registry populated");
		registry
	}

	/// Returns the registry label.
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns the duplicate-key policy.
	pub fn policy(&self) -> DuplicatePolicy {
		self.policy
	}

	/// Inserts `entry` under `key`, resolving an occupied key by policy.
	///
	/// Re-inserting the type already registered under `key` is not a
	/// collision: the entry is replaced under every policy. Types are compared
	/// by [`TypeId`](std::any::TypeId); names are only reported.
	pub fn insert(&self, key: F::Key, entry: Entry<F>) -> Result<InsertAction> {
		let mut state = self.state.write();
		let incoming = entry.info.type_name;

		let Some(existing) = state.entries.get(&key).map(|e| e.info) else {
			tracing::debug!(registry = self.label, %key, type_name = incoming, "registered");
			state.entries.insert(key, entry);
			return Ok(InsertAction::InsertedNew);
		};

		if existing.type_id == entry.info.type_id {
			state.entries.insert(key, entry);
			return Ok(InsertAction::ReplacedExisting);
		}

		let existing = existing.type_name;
		let action = match self.policy {
			DuplicatePolicy::Reject => {
				return Err(FactoryError::DuplicateRegistration {
					family: self.label,
					key: key.to_string(),
					existing,
					incoming,
				});
			}
			DuplicatePolicy::FirstWins => InsertAction::KeptExisting,
			DuplicatePolicy::LastWins => InsertAction::ReplacedExisting,
		};

		tracing::warn!(registry = self.label, %key, existing, incoming, ?action, "registry key collision");
		state.collisions.push(Collision {
			key: key.clone(),
			existing,
			incoming,
			action,
		});

		if action == InsertAction::ReplacedExisting {
			state.entries.insert(key, entry);
		}
		Ok(action)
	}

	/// Removes `key`. Returns false if it was not registered.
	pub fn remove<Q>(&self, key: &Q) -> bool
	where
		Q: ?Sized + Hash + Equivalent<F::Key>,
	{
		let removed = self.state.write().entries.shift_remove(key);
		if let Some(entry) = &removed {
			tracing::debug!(registry = self.label, type_name = entry.info.type_name, "unregistered");
		}
		removed.is_some()
	}

	/// Returns the constructor registered under `key`.
	pub fn lookup<Q>(&self, key: &Q) -> Option<Constructor<F>>
	where
		Q: ?Sized + Hash + Equivalent<F::Key>,
	{
		self.state.read().entries.get(key).map(|e| e.constructor.clone())
	}

	/// Returns the metadata registered under `key`.
	pub fn info<Q>(&self, key: &Q) -> Option<ClassInfo>
	where
		Q: ?Sized + Hash + Equivalent<F::Key>,
	{
		self.state.read().entries.get(key).map(|e| e.info)
	}

	/// Returns true if `key` is registered.
	pub fn contains<Q>(&self, key: &Q) -> bool
	where
		Q: ?Sized + Hash + Equivalent<F::Key>,
	{
		self.state.read().entries.contains_key(key)
	}

	/// Returns every registered key with its metadata, in insertion order.
	pub fn entries(&self) -> Vec<(F::Key, ClassInfo)> {
		self.state.read().entries.iter().map(|(k, e)| (k.clone(), e.info)).collect()
	}

	/// Returns the number of registered keys.
	pub fn len(&self) -> usize {
		self.state.read().entries.len()
	}

	/// Returns true if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.state.read().entries.is_empty()
	}

	/// Returns every collision recorded so far.
	pub fn collisions(&self) -> Vec<Collision<F::Key>> {
		self.state.read().collisions.clone()
	}
}
