//! Concurrent storage of live identities.

use dashmap::DashMap;
use crate::identity::structs::identity::Identity;
use crate::identity::structs::identity_key::IdentityKey;

/// Concurrent map from identity key to the live identity.
///
/// Shared by every in-flight announce; all operations touch a single map
/// shard and never block beyond it.
pub struct IdentityStore {
    pub identities: DashMap<IdentityKey, Identity>,
}
