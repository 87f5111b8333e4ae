//! Glyphs keyed by a single character, built from a label and an integer.

use foundry_factory::{Construct, Factory, Keyed, Result};

/// Abstract interface of the second family.
pub trait Glyph: Keyed<char> {
	/// Renders the glyph with its label and value.
	fn foo(&self) -> String;
}

foundry_factory::family! {
	/// Glyphs keyed by `char`, constructed from `(label, bar)`.
	pub struct Glyphs {
		interface: dyn Glyph,
		key: char,
		args: (String, i32),
	}
}

pub struct A {
	label: String,
	bar: i32,
}
foundry_factory::type_key!(A, char = 'A');

impl Glyph for A {
	fn foo(&self) -> String {
		format!("A{} {}", self.label, self.bar)
	}
}

impl Construct<Glyphs> for A {
	fn construct((label, bar): (String, i32)) -> Box<dyn Glyph> {
		Box::new(A { label, bar })
	}
}

pub struct B {
	label: String,
	bar: i32,
}
foundry_factory::type_key!(B, char = 'B');

impl Glyph for B {
	fn foo(&self) -> String {
		format!("B{} {}", self.label, self.bar)
	}
}

impl Construct<Glyphs> for B {
	fn construct((label, bar): (String, i32)) -> Box<dyn Glyph> {
		Box::new(B { label, bar })
	}
}

foundry_factory::register!(Glyphs => A, B);

/// Lists classes, creates both glyphs, then unregisters `B` by key and `A` by type.
pub fn example() -> Result<Vec<String>> {
	let mut out = vec!["***** Output of second example *****".to_string()];

	for (key, _) in Factory::<Glyphs>::classes() {
		out.push(format!("TypeId: \t{key}"));
	}
	out.push(format!("Number of registered classes: {}", Factory::<Glyphs>::len()));

	let a = Factory::<Glyphs>::create(&'A', ("$".to_string(), 1))?;
	let b = Factory::<Glyphs>::create(&'B', ("€".to_string(), 2))?;
	out.extend([a.foo(), b.foo()]);

	Factory::<Glyphs>::unreg(&'B');
	if !Factory::<Glyphs>::exists(&'B') {
		out.push("There is no class B anymore".to_string());
	}

	Factory::<Glyphs>::unreg_type::<A>();
	if !Factory::<Glyphs>::exists(&'A') {
		out.push("There is no class A anymore".to_string());
	}

	out.push(format!("Number of registered classes: {}", Factory::<Glyphs>::len()));
	out.push(String::new());
	Ok(out)
}
