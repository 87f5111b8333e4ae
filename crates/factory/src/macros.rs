//! Family declaration and registration macros.

/// Declares a family: its marker type, inventory slot and registry.
///
/// Generates `struct $name`, the slot `struct ${name}Reg` collected by
/// `inventory`, and a [`Family`](crate::Family) impl whose registry is
/// populated from the slot on first access.
///
/// ```rust,ignore
/// family! {
///     /// Shapes keyed by name.
///     pub struct Shapes {
///         interface: dyn Shape,
///         key: &'static str,
///         args: f64,
///         policy: DuplicatePolicy::Reject,
///     }
/// }
/// ```
#[macro_export]
macro_rules! family {
	(
		$(#[$attr:meta])*
		$vis:vis struct $name:ident {
			interface: $iface:ty,
			key: $key:ty,
			args: $args:ty
			$(, policy: $policy:expr)?
			$(,)?
		}
	) => {
		$crate::__private::paste::paste! {
			$(#[$attr])*
			#[derive(Debug, Clone, Copy)]
			$vis struct $name;

			#[doc(hidden)]
			$vis struct [<$name Reg>](pub $crate::Registrar<$name>);

			$crate::__private::inventory::collect!([<$name Reg>]);

			impl $crate::RegistryReg<$name> for [<$name Reg>] {
				fn registrar(&self) -> &$crate::Registrar<$name> {
					&self.0
				}
			}

			impl $crate::Family for $name {
				type Interface = $iface;
				type Key = $key;
				type Args = $args;
				type Reg = [<$name Reg>];

				const LABEL: &'static str = stringify!($name);
				$(const POLICY: $crate::DuplicatePolicy = $policy;)?

				fn registry() -> &'static $crate::Registry<Self> {
					static REGISTRY: ::std::sync::LazyLock<$crate::Registry<$name>> =
						::std::sync::LazyLock::new($crate::Registry::from_inventory);
					&REGISTRY
				}
			}
		}
	};
}

/// Submits concrete types for automatic registration in a family.
///
/// Each type must implement [`TypeKey`](crate::TypeKey) for the family's key
/// and [`Construct`](crate::Construct) for the family. The family and its
/// `${family}Reg` slot must be in scope.
///
/// ```rust,ignore
/// register!(Shapes => Square, Circle);
/// ```
#[macro_export]
macro_rules! register {
	($family:ident => $($ty:ty),+ $(,)?) => {
		$crate::__private::paste::paste! {
			$(
				$crate::__private::inventory::submit! {
					[<$family Reg>](
						$crate::Registrar::<$family>::of::<$ty>().in_crate(env!("CARGO_PKG_NAME"))
					)
				}
			)+
		}
	};
}
