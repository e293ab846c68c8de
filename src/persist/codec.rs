//! Typed load/save over a [`KeyValueStore`] using bincode.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::store::{KeyValueStore, StoreError};

/// Serialize `value` and store it under `key`.
pub fn save<S, T>(store: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let bytes = bincode::serialize(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, bytes)
}

/// Load and deserialize the value under `key`, or `None` if absent.
pub fn load<S, T>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(bytes) = store.get(key)? else {
        return Ok(None);
    };
    bincode::deserialize(&bytes)
        .map(Some)
        .map_err(|source| StoreError::Decode {
            key: key.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        save(&mut store, "k", &vec![1u32, 2, 3]).unwrap();

        let loaded: Option<Vec<u32>> = load(&store, "k").unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_load_missing() {
        let store = MemoryStore::new();
        let loaded: Option<Vec<u32>> = load(&store, "k").unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_load_garbage_is_decode_error() {
        let mut store = MemoryStore::new();
        store.set("k", vec![0xff]).unwrap();

        let err = load::<_, Vec<String>>(&store, "k").unwrap_err();
        assert!(matches!(err, StoreError::Decode { ref key, .. } if key == "k"));
    }
}
