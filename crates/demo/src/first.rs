//! Widgets keyed by name and built from a single integer.
//!
//! `A` and `B` register themselves; `C` does not and is added under a custom
//! key at runtime.

use foundry_factory::{Construct, Factory, Keyed, Result};

/// Abstract interface of the first family.
pub trait Widget: Keyed<&'static str> {
	/// Renders the widget's derived value.
	fn foo(&self) -> String;
}

foundry_factory::family! {
	/// Widgets keyed by `&'static str`, constructed from `bar`.
	pub struct Widgets {
		interface: dyn Widget,
		key: &'static str,
		args: i32,
	}
}

/// Reports `bar * 2`.
pub struct A {
	bar: i32,
}
foundry_factory::type_key!(A, &'static str = "A");

impl Widget for A {
	fn foo(&self) -> String {
		format!("A (has type id {}): {}", self.key(), self.bar * 2)
	}
}

impl Construct<Widgets> for A {
	fn construct(bar: i32) -> Box<dyn Widget> {
		Box::new(A { bar })
	}
}

/// Reports `bar * 3`.
pub struct B {
	bar: i32,
}
foundry_factory::type_key!(B, &'static str = "B");

impl Widget for B {
	fn foo(&self) -> String {
		format!("B (has type id {}): {}", self.key(), self.bar * 3)
	}
}

impl Construct<Widgets> for B {
	fn construct(bar: i32) -> Box<dyn Widget> {
		Box::new(B { bar })
	}
}

/// Reports `bar * 4`. Keeps the interface's blank key.
pub struct C {
	bar: i32,
}
foundry_factory::type_key!(C, &'static str = "");

impl Widget for C {
	fn foo(&self) -> String {
		format!("C (has type id {}): {}", self.key(), self.bar * 4)
	}
}

impl Construct<Widgets> for C {
	fn construct(bar: i32) -> Box<dyn Widget> {
		Box::new(C { bar })
	}
}

foundry_factory::register!(Widgets => A, B);

/// Creates `A` and `B`, registers `C` as "Custom", lists classes and renders all three.
pub fn example() -> Result<Vec<String>> {
	let mut out = vec!["***** Output of first example *****".to_string()];

	let a = Factory::<Widgets>::create("A", 1)?;
	let b = Factory::<Widgets>::create("B", 2)?;

	Factory::<Widgets>::reg_as::<C>("Custom")?;

	for (key, info) in Factory::<Widgets>::classes() {
		tracing::debug!(key, type_name = info.type_name, source = %info.source, "class");
		out.push(format!("TypeId: \t{key}"));
	}

	let c = Factory::<Widgets>::create("Custom", 3)?;

	out.extend([a.foo(), b.foo(), c.foo(), String::new()]);
	Ok(out)
}
