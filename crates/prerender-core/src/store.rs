//! Render-time store shared with components.
//!
//! The serializer threads one [`Store`] through a whole render pass and hands
//! it to every component and attribute hook. It never reads or writes the
//! contents itself; the store is a channel owned by the embedding application.

use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Thread-safe key/value store passed through a render pass.
#[derive(Debug, Default)]
pub struct Store {
	values: RwLock<HashMap<String, serde_json::Value>>,
}

impl Store {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a clone of the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<serde_json::Value> {
		self.values.read().get(key).cloned()
	}

	/// Deserializes the value stored under `key`.
	///
	/// Returns `Ok(None)` when the key is absent.
	pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, serde_json::Error> {
		match self.get(key) {
			Some(value) => serde_json::from_value(value).map(Some),
			None => Ok(None),
		}
	}

	/// Stores a JSON value, returning the previous one.
	pub fn set(&self, key: impl Into<String>, value: serde_json::Value) -> Option<serde_json::Value> {
		self.values.write().insert(key.into(), value)
	}

	/// Serializes and stores a value.
	pub fn set_serialized<T: Serialize>(
		&self,
		key: impl Into<String>,
		value: &T,
	) -> Result<(), serde_json::Error> {
		let json = serde_json::to_value(value)?;
		self.set(key, json);
		Ok(())
	}

	/// Removes a value.
	pub fn remove(&self, key: &str) -> Option<serde_json::Value> {
		self.values.write().remove(key)
	}

	/// Checks whether a key is present.
	pub fn contains(&self, key: &str) -> bool {
		self.values.read().contains_key(key)
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.values.read().len()
	}

	/// Checks if the store is empty.
	pub fn is_empty(&self) -> bool {
		self.values.read().is_empty()
	}

	/// Returns a copy of every entry.
	pub fn snapshot(&self) -> HashMap<String, serde_json::Value> {
		self.values.read().clone()
	}
}

impl From<HashMap<String, serde_json::Value>> for Store {
	fn from(values: HashMap<String, serde_json::Value>) -> Self {
		Self {
			values: RwLock::new(values),
		}
	}
}

impl FromIterator<(String, serde_json::Value)> for Store {
	fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
		Self::from(iter.into_iter().collect::<HashMap<_, _>>())
	}
}
