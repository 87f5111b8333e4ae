#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Self-registering keyed object factories.
//!
//! A *family* ties together an abstract interface (a `dyn Trait`), a key type
//! and the argument type every concrete implementation is constructed from.
//! Concrete types opt in with [`register!`]; the family's [`Registry`] is
//! populated from those submissions on first use, and [`Factory`] creates new
//! boxed instances by key.
//!
//! - [`family!`]: declares a family and its process-wide registry
//! - [`register!`]: submits concrete types for automatic registration
//! - [`type_key!`]: declares a type's default key and instance accessor
//! - [`Factory`]: create / reg / unreg / exists / classes facade
//! - [`Registry`]: the key to constructor mapping behind one family
//! - [`Registrar`]: per-type registration adapter
//!
//! ```rust,ignore
//! pub trait Shape: Keyed<&'static str> {
//!     fn area(&self) -> f64;
//! }
//!
//! foundry_factory::family! {
//!     pub struct Shapes {
//!         interface: dyn Shape,
//!         key: &'static str,
//!         args: f64,
//!     }
//! }
//!
//! struct Square(f64);
//! foundry_factory::type_key!(Square, &'static str = "square");
//! impl Construct<Shapes> for Square {
//!     fn construct(side: f64) -> Box<dyn Shape> {
//!         Box::new(Square(side))
//!     }
//! }
//! foundry_factory::register!(Shapes => Square);
//!
//! let square = Factory::<Shapes>::create("square", 2.0)?;
//! ```

pub mod error;
pub mod factory;
pub mod family;
pub mod key;
mod macros;
pub mod meta;
pub mod registrar;
pub mod registry;

pub use error::{FactoryError, Result};
pub use factory::Factory;
pub use family::{Construct, Family, RegistryReg};
pub use key::{Keyed, RegistryKey, TypeKey};
pub use meta::{ClassInfo, RegistrySource};
pub use registrar::Registrar;
pub use registry::{Collision, Constructor, DuplicatePolicy, Entry, InsertAction, Registry};

#[doc(hidden)]
pub mod __private {
	pub use {inventory, paste};
}
