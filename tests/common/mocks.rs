//! Mock version of a remote key-value store.
use mockall::mock;

use bean_copier_rs::util::store::{KeyValueStore, StoreResult};

mock! {
    pub Store {}
    impl KeyValueStore for Store {
        fn get(&self, key: &str) -> StoreResult<Option<String>>;
        fn set(&self, key: &str, value: &str) -> StoreResult<()>;
        fn set_with_ttl(&self, key: &str, value: &str, seconds: u64) -> StoreResult<()>;
        fn ttl(&self, key: &str) -> StoreResult<i64>;
        fn expire(&self, key: &str, seconds: u64) -> StoreResult<bool>;
        fn has_key(&self, key: &str) -> StoreResult<bool>;
        fn delete(&self, key: &str) -> StoreResult<bool>;
        fn delete_many(&self, keys: &[String]) -> StoreResult<u64>;
    }
}
