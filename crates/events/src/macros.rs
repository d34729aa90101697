//! Registry generation.
//!
//! [`define_events!`] expands one list of `Variant => "name" (params)` entries
//! into the [`Event`](crate::Event) enum, its lookup tables and the
//! name/parameter constants. Adding an event only requires adding it to the
//! invocation in `lib.rs`.

/// Generates `Event`, `EVENTS` and `EVENT_PARAMS` from a single event list.
///
/// Entries keep their authored order. Parameters are optional and listed as
/// bare identifiers:
///
/// ```ignore
/// define_events! {
///     /// A key was pressed.
///     Key => "on_key" (key, state),
///     /// A file was opened.
///     Open => "on_open",
/// }
/// ```
macro_rules! define_events {
	(@spec) => {
		None
	};
	(@spec $($param:ident),+) => {
		Some(define_events!(@join $($param),+))
	};
	(@join $first:ident $(, $rest:ident)*) => {
		concat!(stringify!($first) $(, ", ", stringify!($rest))*)
	};
	($(
		$(#[$meta:meta])*
		$variant:ident => $name:literal $(($($param:ident),+ $(,)?))?
	),+ $(,)?) => {
		/// Editor lifecycle events a plugin can subscribe to.
		///
		/// Variants are declared in the authored registry order, which is also
		/// the order of [`Event::ALL`] and [`EVENTS`].
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
		pub enum Event {
			$(
				$(#[$meta])*
				$variant,
			)+
		}

		impl Event {
			/// Number of registered events.
			pub const COUNT: usize = [$($name),+].len();

			/// Every event, in registry order.
			pub const ALL: [Event; Event::COUNT] = [$(Event::$variant),+];

			/// The handler name the host editor calls, e.g. `on_open`.
			pub const fn as_str(self) -> &'static str {
				match self {
					$(Event::$variant => $name,)+
				}
			}

			/// Extra parameters the handler receives, in call order.
			///
			/// Empty when the event only passes the implicit defaults.
			pub const fn params(self) -> &'static [&'static str] {
				match self {
					$(Event::$variant => &[$($(stringify!($param)),+)?],)+
				}
			}

			/// The parameters joined with `", "`, as authored.
			pub const fn param_spec(self) -> Option<&'static str> {
				match self {
					$(Event::$variant => define_events!(@spec $($($param),+)?),)+
				}
			}

			/// Resolves a handler name to its event.
			pub fn lookup(name: &str) -> Option<Event> {
				match name {
					$($name => Some(Event::$variant),)+
					_ => None,
				}
			}
		}

		/// Canonical event names, in registry order.
		pub const EVENTS: [&str; Event::COUNT] = [$($name),+];

		/// Events with extra handler parameters, mapped to their parameter spec.
		pub const EVENT_PARAMS: &[(&str, &str)] = &[
			$($(($name, define_events!(@join $($param),+)),)?)+
		];
	};
}
