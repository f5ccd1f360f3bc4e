//! Building hash maps from key/value pairs.
//!
//! Unlike `collect::<HashMap<_, _>>()`, which silently keeps the last value of
//! a repeated key, these functions reject duplicates.

use std::collections::hash_map::Entry;
use std::hash::Hash;

use ahash::AHashMap;
use sundry_common::{Error, Result};

/// Builds a map from `pairs`.
///
/// Fails with an invalid-argument error naming the position of the first pair
/// whose key was already seen.
///
/// ```
/// use sundry_sequences::map_from_pairs;
///
/// let map = map_from_pairs([("a", 1), ("b", 2)]).unwrap();
/// assert_eq!(map["b"], 2);
/// assert!(map_from_pairs([("a", 1), ("a", 2)]).is_err());
/// ```
pub fn map_from_pairs<K, V, I>(pairs: I) -> Result<AHashMap<K, V>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Eq + Hash,
{
    let pairs = pairs.into_iter();
    let mut map = AHashMap::with_capacity(pairs.size_hint().0);
    for (index, (key, value)) in pairs.enumerate() {
        insert_unique(&mut map, index, key, value)?;
    }
    Ok(map)
}

/// Builds a map from pairs whose keys may be absent.
///
/// Fails with a null-argument error at the first `None` key, and with an
/// invalid-argument error on a duplicate key.
pub fn map_from_nullable_pairs<K, V, I>(pairs: I) -> Result<AHashMap<K, V>>
where
    I: IntoIterator<Item = (Option<K>, V)>,
    K: Eq + Hash,
{
    let pairs = pairs.into_iter();
    let mut map = AHashMap::with_capacity(pairs.size_hint().0);
    for (index, (key, value)) in pairs.enumerate() {
        let key = key.ok_or_else(|| Error::null_arg(format!("pairs[{index}].key")))?;
        insert_unique(&mut map, index, key, value)?;
    }
    Ok(map)
}

fn insert_unique<K: Eq + Hash, V>(
    map: &mut AHashMap<K, V>,
    index: usize,
    key: K,
    value: V,
) -> Result<()> {
    match map.entry(key) {
        Entry::Occupied(_) => {
            log::debug!("duplicate key at pair {index}");
            Err(Error::invalid_arg(
                "pairs",
                format!("duplicate key at index {index}"),
            ))
        }
        Entry::Vacant(entry) => {
            entry.insert(value);
            Ok(())
        }
    }
}
