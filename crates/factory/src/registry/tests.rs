use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::{Construct, Keyed, RegistrySource, TypeKey};

trait Token: Keyed<&'static str> {
	fn weight(&self) -> i32;
}

crate::family! {
	struct Tokens {
		interface: dyn Token,
		key: &'static str,
		args: i32,
	}
}

struct Light(i32);
crate::type_key!(Light, &'static str = "light");

impl Token for Light {
	fn weight(&self) -> i32 {
		self.0
	}
}

impl Construct<Tokens> for Light {
	fn construct(w: i32) -> Box<dyn Token> {
		Box::new(Light(w))
	}
}

struct Heavy(i32);
crate::type_key!(Heavy, &'static str = "heavy");

impl Token for Heavy {
	fn weight(&self) -> i32 {
		self.0 * 10
	}
}

impl Construct<Tokens> for Heavy {
	fn construct(w: i32) -> Box<dyn Token> {
		Box::new(Heavy(w))
	}
}

/// Claims the same default key as [`Light`].
struct Faint(i32);
crate::type_key!(Faint, &'static str = "light");

impl Token for Faint {
	fn weight(&self) -> i32 {
		-self.0
	}
}

impl Construct<Tokens> for Faint {
	fn construct(w: i32) -> Box<dyn Token> {
		Box::new(Faint(w))
	}
}

crate::register!(Tokens => Light, Heavy, Faint);

fn registry(policy: DuplicatePolicy) -> Registry<Tokens> {
	Registry::new("test", policy)
}

fn light() -> Registrar<Tokens> {
	Registrar::of::<Light>()
}

fn faint() -> Registrar<Tokens> {
	Registrar::of::<Faint>()
}

#[test]
fn test_insert_and_lookup() {
	let reg = registry(DuplicatePolicy::LastWins);
	assert_eq!(light().register(&reg), Ok(InsertAction::InsertedNew));

	let token = reg.lookup("light").unwrap().call(3);
	assert_eq!(token.weight(), 3);
	assert_eq!(token.key(), "light");
	assert!(reg.contains("light"));
	assert!(reg.lookup("heavy").is_none());
}

#[test]
fn test_remove() {
	let reg = registry(DuplicatePolicy::LastWins);
	light().register(&reg).unwrap();

	assert!(reg.remove("light"));
	assert!(!reg.contains("light"));
	assert!(!reg.remove("light"));
	assert!(reg.is_empty());
}

#[test]
fn test_last_wins() {
	let reg = registry(DuplicatePolicy::LastWins);
	light().register(&reg).unwrap();
	assert_eq!(faint().register(&reg), Ok(InsertAction::ReplacedExisting));

	assert_eq!(reg.len(), 1);
	assert_eq!(reg.lookup("light").unwrap().call(2).weight(), -2);

	let collisions = reg.collisions();
	assert_eq!(collisions.len(), 1);
	assert_eq!(collisions[0].key, "light");
	assert_eq!(collisions[0].winner(), std::any::type_name::<Faint>());
}

#[test]
fn test_first_wins() {
	let reg = registry(DuplicatePolicy::FirstWins);
	light().register(&reg).unwrap();
	assert_eq!(faint().register(&reg), Ok(InsertAction::KeptExisting));

	assert_eq!(reg.lookup("light").unwrap().call(2).weight(), 2);
	assert_eq!(reg.collisions()[0].winner(), std::any::type_name::<Light>());
}

#[test]
fn test_reject_leaves_registry_untouched() {
	let reg = registry(DuplicatePolicy::Reject);
	light().register(&reg).unwrap();

	let err = faint().register(&reg).unwrap_err();
	assert_eq!(
		err,
		FactoryError::DuplicateRegistration {
			family: "test",
			key: "light".to_string(),
			existing: std::any::type_name::<Light>(),
			incoming: std::any::type_name::<Faint>(),
		}
	);
	assert_eq!(reg.lookup("light").unwrap().call(2).weight(), 2);
	assert!(reg.collisions().is_empty());
}

#[test]
fn test_same_type_is_not_a_collision() {
	let reg = registry(DuplicatePolicy::Reject);
	light().register(&reg).unwrap();
	assert_eq!(light().register(&reg), Ok(InsertAction::ReplacedExisting));
	assert!(reg.collisions().is_empty());
}

#[test]
fn test_entries_keep_insertion_order() {
	let reg = registry(DuplicatePolicy::LastWins);
	light().register(&reg).unwrap();
	Registrar::<Tokens>::of::<Heavy>().register(&reg).unwrap();
	light().register_as(&reg, "extra").unwrap();

	// Replacing keeps the slot; removing closes the gap.
	faint().register(&reg).unwrap();
	reg.remove("heavy");

	let keys: Vec<_> = reg.entries().into_iter().map(|(k, _)| k).collect();
	assert_eq!(keys, vec!["light", "extra"]);
}

#[test]
fn test_custom_key_metadata() {
	let reg = registry(DuplicatePolicy::LastWins);
	light().register_as(&reg, "custom").unwrap();

	let info = reg.info("custom").unwrap();
	assert!(info.custom);
	assert_eq!(info.source, RegistrySource::Runtime);
	assert_eq!(info.type_name, std::any::type_name::<Light>());

	// The instance keeps reporting its own default key.
	assert_eq!(reg.lookup("custom").unwrap().call(1).key(), "light");
	assert!(!reg.contains(&Light::type_key()));
}

#[test]
fn test_registrar_unregister_leaves_custom_keys() {
	let reg = registry(DuplicatePolicy::LastWins);
	let registrar = light().in_crate("probe");
	registrar.register(&reg).unwrap();
	registrar.register_as(&reg, "alias").unwrap();

	assert_eq!(registrar.source(), RegistrySource::Crate("probe"));
	assert!(registrar.unregister(&reg));
	assert!(!registrar.unregister(&reg));
	assert!(reg.contains("alias"));
	assert_eq!(reg.info("alias").unwrap().source, RegistrySource::Crate("probe"));
}

#[test]
fn test_from_inventory_is_sorted_and_resolved() {
	let reg = Registry::<Tokens>::from_inventory();

	let keys: Vec<_> = reg.entries().into_iter().map(|(k, _)| k).collect();
	assert_eq!(keys, vec!["heavy", "light"]);

	// Faint sorts before Light by type name, so Light is inserted last and wins.
	let collisions = reg.collisions();
	assert_eq!(collisions.len(), 1);
	assert_eq!(collisions[0].winner(), std::any::type_name::<Light>());

	let info = reg.info("heavy").unwrap();
	assert_eq!(info.source, RegistrySource::Crate(env!("CARGO_PKG_NAME")));
	assert!(!info.custom);
}

#[test]
fn test_constructor_may_reenter_registry() {
	let reg: &'static Registry<Tokens> = Box::leak(Box::new(registry(DuplicatePolicy::LastWins)));
	light().register(reg).unwrap();
	reg.insert(
		"reentrant",
		Entry::new(
			Constructor::new(move |w| {
				reg.remove("light");
				Box::new(Heavy(w)) as Box<dyn Token>
			}),
			ClassInfo::runtime::<Heavy>(),
		),
	)
	.unwrap();

	let token = reg.lookup("reentrant").unwrap().call(1);
	assert_eq!(token.weight(), 10);
	assert!(!reg.contains("light"));
}

fn closure_entry<C>(f: C) -> Entry<Tokens>
where
	C: Fn(i32) -> Box<dyn Token> + Send + Sync + 'static,
{
	Entry::new(Constructor::new(f), ClassInfo::runtime::<C>())
}

#[rstest]
#[case::first_wins(DuplicatePolicy::FirstWins)]
#[case::reject(DuplicatePolicy::Reject)]
fn test_distinct_closures_from_one_fn_collide(#[case] policy: DuplicatePolicy) {
	let reg = registry(policy);
	let first = closure_entry(|w| Box::new(Light(w)) as Box<dyn Token>);
	let second = closure_entry(|w| Box::new(Heavy(w)) as Box<dyn Token>);
	assert_ne!(first.info().type_id, second.info().type_id);

	assert_eq!(reg.insert("x", first), Ok(InsertAction::InsertedNew));
	match policy {
		DuplicatePolicy::Reject => {
			let err = reg.insert("x", second).unwrap_err();
			assert!(matches!(err, FactoryError::DuplicateRegistration { .. }));
			assert!(reg.collisions().is_empty());
		}
		_ => {
			assert_eq!(reg.insert("x", second), Ok(InsertAction::KeptExisting));
			assert_eq!(reg.collisions().len(), 1);
			assert_eq!(reg.collisions()[0].action, InsertAction::KeptExisting);
		}
	}

	assert_eq!(reg.len(), 1);
	assert_eq!(reg.lookup("x").unwrap().call(3).weight(), 3);
}

const KEYS: [&str; 4] = ["a", "b", "c", "d"];

proptest! {
	#[test]
	fn prop_entries_track_membership(ops in proptest::collection::vec((any::<bool>(), 0usize..KEYS.len()), 0..64)) {
		let reg = registry(DuplicatePolicy::LastWins);
		let mut model = BTreeSet::new();

		for (insert, idx) in ops {
			let key = KEYS[idx];
			if insert {
				light().register_as(&reg, key).unwrap();
				model.insert(key);
			} else {
				prop_assert_eq!(reg.remove(key), model.remove(key));
			}
		}

		let entries = reg.entries();
		let unique: BTreeSet<_> = entries.iter().map(|(k, _)| *k).collect();
		prop_assert_eq!(entries.len(), reg.len());
		prop_assert_eq!(unique.len(), entries.len());
		prop_assert_eq!(unique, model.clone());
		prop_assert_eq!(KEYS.iter().filter(|k| reg.contains(**k)).count(), model.len());
	}
}
