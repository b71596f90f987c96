//! Factory cache for tags only known at runtime.
//!
//! [`make_element`] hands out one shared [`ElementFactory`] per tag name,
//! created on first request. The named element functions bind their tag at
//! compile time and do not go through this cache.

use crate::factory::ElementFactory;
use hyperpage_core::{Host, PageHost};
use parking_lot::RwLock;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

/// Memoizes one intrinsic-element factory per tag name.
pub struct FactoryRegistry<H = PageHost> {
	host: H,
	factories: RwLock<HashMap<Cow<'static, str>, Arc<ElementFactory<H>>>>,
}

impl FactoryRegistry<PageHost> {
	/// Creates an empty registry on the default host.
	pub fn new() -> Self {
		Self::with_host(PageHost)
	}
}

impl Default for FactoryRegistry<PageHost> {
	fn default() -> Self {
		Self::new()
	}
}

impl<H: Host + Clone> FactoryRegistry<H> {
	/// Creates an empty registry whose factories construct through `host`.
	pub fn with_host(host: H) -> Self {
		Self {
			host,
			factories: RwLock::new(HashMap::new()),
		}
	}

	/// Returns the factory for `tag`, creating it on first request.
	///
	/// When two threads race on a miss, the first stored factory wins and
	/// both callers receive it.
	pub fn get_or_create(&self, tag: impl Into<Cow<'static, str>>) -> Arc<ElementFactory<H>> {
		let tag = tag.into();

		{
			let factories = self.factories.read();
			if let Some(factory) = factories.get(&*tag) {
				return Arc::clone(factory);
			}
		}

		tracing::debug!(tag = %tag, "creating element factory");
		let mut factories = self.factories.write();
		let factory = factories
			.entry(tag.clone())
			.or_insert_with(|| Arc::new(ElementFactory::intrinsic(tag, self.host.clone())));
		Arc::clone(factory)
	}

	/// Returns `true` if a factory for `tag` has been created.
	pub fn contains(&self, tag: &str) -> bool {
		self.factories.read().contains_key(tag)
	}

	/// Number of cached factories.
	pub fn len(&self) -> usize {
		self.factories.read().len()
	}

	/// Returns `true` if no factory has been created yet.
	pub fn is_empty(&self) -> bool {
		self.factories.read().is_empty()
	}
}

impl<H> std::fmt::Debug for FactoryRegistry<H> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let factories = self.factories.read();
		let mut tags: Vec<&str> = factories.keys().map(|tag| &**tag).collect();
		tags.sort_unstable();
		f.debug_struct("FactoryRegistry").field("tags", &tags).finish()
	}
}

// Global registry instance
static GLOBAL_REGISTRY: once_cell::sync::Lazy<FactoryRegistry> =
	once_cell::sync::Lazy::new(FactoryRegistry::new);

/// Returns the shared factory for `tag` on the default host.
///
/// ```
/// use hyperpage_elements::make_element;
/// use std::sync::Arc;
///
/// let custom = make_element("my-widget");
/// assert!(Arc::ptr_eq(&custom, &make_element("my-widget")));
/// assert_eq!(custom.build("hi").render_to_string(), "<my-widget>hi</my-widget>");
/// ```
pub fn make_element(tag: impl Into<Cow<'static, str>>) -> Arc<ElementFactory> {
	GLOBAL_REGISTRY.get_or_create(tag)
}

#[cfg(test)]
mod tests {
	use super::*;
	use hyperpage_core::{ConstructError, Props, StrictHost};
	use rstest::rstest;
	use std::thread;

	#[rstest]
	fn test_same_tag_returns_same_factory() {
		// Arrange
		let registry = FactoryRegistry::new();

		// Act
		let first = registry.get_or_create("section");
		let second = registry.get_or_create(String::from("section"));

		// Assert
		assert!(Arc::ptr_eq(&first, &second));
		assert_eq!(registry.len(), 1);
	}

	#[rstest]
	fn test_distinct_tags_get_distinct_factories() {
		let registry = FactoryRegistry::new();
		let div = registry.get_or_create("div");
		let span = registry.get_or_create("span");
		assert!(!Arc::ptr_eq(&div, &span));
		assert_eq!(div.element_type().name(), "div");
		assert_eq!(span.element_type().name(), "span");
		assert!(registry.contains("div"));
		assert!(!registry.contains("p"));
	}

	#[rstest]
	fn test_new_registry_is_empty() {
		let registry = FactoryRegistry::default();
		assert!(registry.is_empty());
		assert_eq!(format!("{:?}", registry), "FactoryRegistry { tags: [] }");
	}

	#[rstest]
	fn test_registry_with_strict_host() {
		let registry = FactoryRegistry::with_host(StrictHost);
		let br = registry.get_or_create("br");
		let result = br.call((Props::new(), "x"));
		assert_eq!(
			result.unwrap_err(),
			ConstructError::VoidElementChildren {
				tag: "br".to_string()
			}
		);
	}

	#[rstest]
	fn test_concurrent_misses_share_one_factory() {
		// Arrange
		let registry = Arc::new(FactoryRegistry::new());

		// Act
		let handles: Vec<_> = (0..8)
			.map(|_| {
				let registry = Arc::clone(&registry);
				thread::spawn(move || registry.get_or_create("article"))
			})
			.collect();
		let factories: Vec<_> = handles
			.into_iter()
			.filter_map(|handle| handle.join().ok())
			.collect();

		// Assert
		assert_eq!(factories.len(), 8);
		assert!(factories.iter().all(|f| Arc::ptr_eq(f, &factories[0])));
		assert_eq!(registry.len(), 1);
	}

	#[rstest]
	fn test_make_element_uses_global_registry() {
		let first = make_element("x-registry-test");
		let second = make_element("x-registry-test");
		assert!(Arc::ptr_eq(&first, &second));
		assert!(GLOBAL_REGISTRY.contains("x-registry-test"));
	}
}
