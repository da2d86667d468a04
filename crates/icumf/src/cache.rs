//! Thread-safe cache of compiled messages.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::Error;
use crate::locale::LocaleTable;
use crate::message::{MessageFormat, compile};

/// Compiled messages keyed by `(template, language)`.
///
/// Lookups take a shared lock; only a miss takes the write lock. Failed
/// compilations are not cached.
///
/// # Example
///
/// ```
/// use icumf::{CldrLocaleTable, Context, MessageCache};
///
/// let cache = MessageCache::new(CldrLocaleTable::new());
/// let first = cache.get_or_compile("Hello, {name}!", "en").unwrap();
/// let again = cache.get_or_compile("Hello, {name}!", "en").unwrap();
/// assert!(std::sync::Arc::ptr_eq(&first, &again));
///
/// let mut ctx = Context::new().with("name", "Ada");
/// assert_eq!(first.format(&mut ctx).unwrap(), "Hello, Ada!");
/// ```
#[derive(Debug)]
pub struct MessageCache<T> {
    table: T,
    entries: RwLock<HashMap<(String, String), Arc<MessageFormat>>>,
}

impl<T: LocaleTable> MessageCache<T> {
    pub fn new(table: T) -> Self {
        Self {
            table,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The locale table messages are compiled against.
    pub fn table(&self) -> &T {
        &self.table
    }

    /// Return the cached message, compiling and inserting it on a miss.
    pub fn get_or_compile(&self, template: &str, language: &str) -> Result<Arc<MessageFormat>, Error> {
        let key = (template.to_string(), language.to_string());
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(message) = entries.get(&key) {
                #[cfg(feature = "tracing")]
                tracing::trace!(template, language, "message cache hit");
                return Ok(Arc::clone(message));
            }
        }

        let compiled = Arc::new(compile(template, language, &self.table)?);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have compiled the same key meanwhile; keep the first.
        let message = entries.entry(key).or_insert(compiled);
        Ok(Arc::clone(message))
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
