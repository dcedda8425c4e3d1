//! A caller-owned, lazily-initialized cache.
//!
//! Callers that repeatedly feed the same external table (material properties,
//! precomputed simulation results) into the solvers can hold it in a
//! [`Cache`]: the value is loaded at most once, on first access, and stays in
//! memory until explicitly invalidated (e.g., after the underlying file
//! changes). The solvers themselves remain stateless; caching is entirely the
//! caller's concern.

/// A lazily-initialized, manually-invalidated cache for a single value.
///
/// # Example
///
/// ```
/// use teg_models::support::cache::Cache;
///
/// let mut cache = Cache::new();
/// let value: &Vec<i32> = cache.get_or_load(|| vec![1, 2, 3]);
/// assert_eq!(value.len(), 3);
///
/// cache.invalidate();
/// assert!(!cache.is_loaded());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cache<T> {
    value: Option<T>,
}

impl<T> Cache<T> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self { value: None }
    }

    /// Returns the cached value, loading it on first access.
    ///
    /// `load` is called only if no value is currently cached.
    pub fn get_or_load(&mut self, load: impl FnOnce() -> T) -> &T {
        self.value.get_or_insert_with(load)
    }

    /// Returns the cached value, loading it fallibly on first access.
    ///
    /// If `load` fails, the cache stays empty and the next access retries.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `load`.
    pub fn try_get_or_load<E>(&mut self, load: impl FnOnce() -> Result<T, E>) -> Result<&T, E> {
        if self.value.is_none() {
            self.value = Some(load()?);
        }
        let Some(value) = self.value.as_ref() else {
            unreachable!("cache was just populated");
        };
        Ok(value)
    }

    /// Drops the cached value so the next access reloads it.
    pub fn invalidate(&mut self) {
        self.value = None;
    }

    /// Returns whether a value is currently cached.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.value.is_some()
    }
}
