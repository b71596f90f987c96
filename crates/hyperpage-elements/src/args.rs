//! Call arguments of element functions.
//!
//! An element function takes an optional first argument followed by any
//! number of children. The first argument is either a properties object or
//! the first child; [`Arg`] is the union of those two shapes, so deciding
//! which one was passed is a plain `match`.
//!
//! Tuples provide the variadic form. Their first element may be anything
//! convertible into an [`Arg`], the remaining elements anything that is
//! [`IntoPage`]:
//!
//! ```
//! use hyperpage_core::Props;
//! use hyperpage_elements::html::{div, h1, p};
//!
//! let page = div((Props::new().class_name("container"), h1("Title"), p("Body")));
//! assert_eq!(
//!     page.render_to_string(),
//!     "<div class=\"container\"><h1>Title</h1><p>Body</p></div>"
//! );
//! ```

use hyperpage_core::{ComponentElement, IntoPage, Page, PageElement, Props};
use std::borrow::Cow;

/// The first argument of an element function call.
#[derive(Debug)]
pub enum Arg {
	/// A properties object.
	Props(Props),
	/// The first child.
	Child(Page),
}

impl Arg {
	/// Returns `true` if the argument is a properties object.
	pub fn is_props(&self) -> bool {
		matches!(self, Arg::Props(_))
	}
}

impl From<Props> for Arg {
	fn from(props: Props) -> Self {
		Arg::Props(props)
	}
}

impl<T: IntoPage> From<Option<T>> for Arg {
	fn from(child: Option<T>) -> Self {
		Arg::Child(child.into_page())
	}
}

impl<T: IntoPage> From<Vec<T>> for Arg {
	fn from(children: Vec<T>) -> Self {
		Arg::Child(children.into_page())
	}
}

impl From<&String> for Arg {
	fn from(text: &String) -> Self {
		Arg::Child(text.into_page())
	}
}

/// The full argument list of an element function call.
#[derive(Debug, Default)]
pub struct Args {
	first: Option<Arg>,
	rest: Vec<Page>,
}

impl Args {
	/// An empty argument list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds an argument list from its parts.
	pub fn from_parts(first: Option<Arg>, rest: Vec<Page>) -> Self {
		Self { first, rest }
	}

	/// Properties followed by children, for children only known at runtime.
	pub fn with_props(props: Props, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self {
			first: Some(Arg::Props(props)),
			rest: children.into_iter().map(IntoPage::into_page).collect(),
		}
	}

	/// Children only, for children only known at runtime.
	///
	/// The first child is still passed as the first argument.
	pub fn children(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		let mut children = children.into_iter().map(IntoPage::into_page);
		Self {
			first: children.next().map(Arg::Child),
			rest: children.collect(),
		}
	}

	/// Returns the first argument.
	pub fn first(&self) -> Option<&Arg> {
		self.first.as_ref()
	}

	/// Returns the arguments after the first.
	pub fn rest(&self) -> &[Page] {
		&self.rest
	}

	/// Splits the list into the first argument and the rest.
	pub fn into_parts(self) -> (Option<Arg>, Vec<Page>) {
		(self.first, self.rest)
	}
}

/// Types usable as the argument list of an element function.
pub trait IntoArgs {
	/// Converts self into an argument list.
	fn into_args(self) -> Args;
}

impl IntoArgs for Args {
	fn into_args(self) -> Args {
		self
	}
}

impl IntoArgs for () {
	fn into_args(self) -> Args {
		Args::new()
	}
}

impl IntoArgs for Arg {
	fn into_args(self) -> Args {
		Args::from_parts(Some(self), Vec::new())
	}
}

impl<T: IntoPage> IntoArgs for Option<T> {
	fn into_args(self) -> Args {
		Arg::from(self).into_args()
	}
}

impl<T: IntoPage> IntoArgs for Vec<T> {
	fn into_args(self) -> Args {
		Arg::from(self).into_args()
	}
}

impl IntoArgs for &String {
	fn into_args(self) -> Args {
		Arg::from(self).into_args()
	}
}

impl IntoArgs for Props {
	fn into_args(self) -> Args {
		Arg::Props(self).into_args()
	}
}

macro_rules! impl_child_arg {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Arg {
				fn from(child: $ty) -> Self {
					Arg::Child(child.into_page())
				}
			}

			impl IntoArgs for $ty {
				fn into_args(self) -> Args {
					Arg::from(self).into_args()
				}
			}
		)*
	};
}

impl_child_arg!(
	Page,
	PageElement,
	ComponentElement,
	String,
	&'static str,
	Cow<'static, str>,
	char,
	i8,
	i16,
	i32,
	i64,
	i128,
	isize,
	u8,
	u16,
	u32,
	u64,
	u128,
	usize,
	f32,
	f64,
);

macro_rules! impl_into_args_tuple {
	($($rest:ident),*) => {
		impl<A, $($rest),*> IntoArgs for (A, $($rest,)*)
		where
			A: Into<Arg>,
			$($rest: IntoPage,)*
		{
			#[allow(non_snake_case)]
			fn into_args(self) -> Args {
				let (first, $($rest,)*) = self;
				Args::from_parts(Some(first.into()), vec![$($rest.into_page()),*])
			}
		}
	};
}

impl_into_args_tuple!();
impl_into_args_tuple!(B);
impl_into_args_tuple!(B, C);
impl_into_args_tuple!(B, C, D);
impl_into_args_tuple!(B, C, D, E);
impl_into_args_tuple!(B, C, D, E, F);
impl_into_args_tuple!(B, C, D, E, F, G);
impl_into_args_tuple!(B, C, D, E, F, G, H);
impl_into_args_tuple!(B, C, D, E, F, G, H, I);
impl_into_args_tuple!(B, C, D, E, F, G, H, I, J);
impl_into_args_tuple!(B, C, D, E, F, G, H, I, J, K);
impl_into_args_tuple!(B, C, D, E, F, G, H, I, J, K, L);
