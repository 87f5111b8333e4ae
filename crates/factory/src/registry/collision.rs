/// Policy for a second type claiming a key that is already registered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Replace the existing constructor. The key keeps its enumeration slot.
	#[default]
	LastWins,
	/// Keep the existing constructor and drop the new one.
	FirstWins,
	/// Refuse the insertion with [`FactoryError::DuplicateRegistration`](crate::FactoryError::DuplicateRegistration).
	Reject,
}

/// Result of a successful insertion.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Key was new; constructor inserted.
	InsertedNew,
	/// Key existed; kept the existing constructor (policy chose existing).
	KeptExisting,
	/// Key existed; replaced with the new constructor.
	ReplacedExisting,
}

/// Records a duplicate-key insertion resolved by policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision<K> {
	/// The contested key.
	pub key: K,
	/// Type that held the key before the insertion.
	pub existing: &'static str,
	/// Type that tried to claim it.
	pub incoming: &'static str,
	/// What the registry did about it.
	pub action: InsertAction,
}

impl<K> Collision<K> {
	/// Returns the type left holding the key.
	pub fn winner(&self) -> &'static str {
		match self.action {
			InsertAction::ReplacedExisting => self.incoming,
			_ => self.existing,
		}
	}
}
