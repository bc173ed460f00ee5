use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use crate::identity::structs::identity::Identity;
use crate::identity::structs::identity_key::IdentityKey;
use crate::identity::structs::identity_store::IdentityStore;

impl IdentityStore {
    pub fn new() -> IdentityStore {
        IdentityStore {
            identities: DashMap::new(),
        }
    }

    /// Returns the identity for the key, creating one if none exists.
    ///
    /// Atomic under the shard lock: between two deletes of the same key,
    /// exactly one caller observes `existed == false`, and that caller's
    /// freshly created identity is what every other caller sees.
    pub fn get_or_create<F>(&self, key: &IdentityKey, factory: F) -> (Identity, bool)
    where
        F: FnOnce() -> Identity,
    {
        match self.identities.entry(key.clone()) {
            Entry::Occupied(entry) => (entry.get().clone(), true),
            Entry::Vacant(entry) => {
                let identity = factory();
                entry.insert(identity.clone());
                (identity, false)
            }
        }
    }

    /// Removes the identity for the key. Idempotent.
    pub fn remove(&self, key: &IdentityKey) {
        self.identities.remove(key);
    }

    pub fn contains(&self, key: &IdentityKey) -> bool {
        self.identities.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

impl Default for IdentityStore {
    fn default() -> Self {
        Self::new()
    }
}
