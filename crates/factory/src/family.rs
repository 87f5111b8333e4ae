//! Family declaration contract.

use crate::key::{Keyed, RegistryKey};
use crate::registrar::Registrar;
use crate::registry::{DuplicatePolicy, Registry};

/// One (interface, key type, constructor arguments) combination.
///
/// Each family owns an independent process-wide [`Registry`]. Implement it
/// with [`family!`](crate::family) rather than by hand: the macro also
/// declares the inventory slot and the lazily populated registry.
pub trait Family: Sized + 'static {
	/// Abstract interface instances are returned as, usually `dyn Trait`.
	type Interface: ?Sized + Keyed<Self::Key> + 'static;
	/// Key type identifying concrete types within this family.
	type Key: RegistryKey;
	/// Argument value every constructor in this family receives.
	type Args: 'static;
	/// Inventory slot carrying [`Registrar`]s submitted by [`register!`](crate::register).
	type Reg: RegistryReg<Self>;

	/// Name used in logs and errors.
	const LABEL: &'static str;
	/// How the family's registry treats a second type claiming a taken key.
	const POLICY: DuplicatePolicy = DuplicatePolicy::LastWins;

	/// Returns the family's process-wide registry, populating it on first call.
	fn registry() -> &'static Registry<Self>;
}

/// A concrete type that can be built through family `F`.
pub trait Construct<F: Family> {
	/// Builds a new instance from the family's arguments.
	fn construct(args: F::Args) -> Box<F::Interface>;
}

/// Trait for inventory slot types to expose their registrar.
///
/// [`family!`](crate::family) generates the slot as `<Family>Reg` and collects
/// it with `inventory::collect!`.
pub trait RegistryReg<F: Family>: Sync + 'static {
	/// Returns the registrar stored in this slot.
	fn registrar(&self) -> &Registrar<F>;
}
