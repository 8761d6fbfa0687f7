use crate::StoreResult;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// String-keyed, string-valued persistence in the shape of browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: String) -> StoreResult<()>;
    fn remove(&self, key: &str) -> StoreResult<()>;
    fn keys(&self) -> StoreResult<Vec<String>>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for ::std::sync::Arc<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: String) -> StoreResult<()> {
        (**self).set(key, value)
    }
    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
    fn keys(&self) -> StoreResult<Vec<String>> {
        (**self).keys()
    }
}
