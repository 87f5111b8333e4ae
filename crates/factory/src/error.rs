use thiserror::Error;

/// Errors surfaced by factory and registry operations.
///
/// Every error is local to the call that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
	/// `create` was called with a key that has no constructor.
	#[error("{family}: no class registered under key {key:?}")]
	KeyNotFound {
		/// Label of the family that was asked.
		family: &'static str,
		/// The requested key, rendered with `Display`.
		key: String,
	},
	/// A different type already holds the key and the registry rejects duplicates.
	#[error("{family}: key {key:?} already registered to {existing}, rejected {incoming}")]
	DuplicateRegistration {
		/// Label of the family whose registry refused the insertion.
		family: &'static str,
		/// The contested key, rendered with `Display`.
		key: String,
		/// Type currently registered under the key.
		existing: &'static str,
		/// Type that tried to claim it.
		incoming: &'static str,
	},
}

/// Result alias for factory operations.
pub type Result<T, E = FactoryError> = std::result::Result<T, E>;
