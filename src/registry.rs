//! Default-instance registry.
//!
//! Callers that do not care to configure a kernel can share one
//! default-constructed instance per concrete type. Construction is lazy and
//! first-caller-wins; instances live for the rest of the process.

use core::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::Mutex;

static INSTANCES: OnceLock<Mutex<HashMap<TypeId, &'static (dyn Any + Send + Sync)>>> =
    OnceLock::new();

/// The shared default instance of `K`.
///
/// The first call for a given `K` constructs and leaks one instance under
/// the registry lock; every later call, from any thread, gets the same
/// reference. Losing the construction race is impossible: construction
/// happens inside the lock.
pub fn default_instance<K: Default + Send + Sync + 'static>() -> &'static K {
    let mut map = INSTANCES
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock();
    let entry: &'static (dyn Any + Send + Sync) =
        *map.entry(TypeId::of::<K>()).or_insert_with(|| {
            let instance: &'static K = Box::leak(Box::new(K::default()));
            instance
        });
    drop(map);
    match entry.downcast_ref::<K>() {
        Some(instance) => instance,
        None => unreachable!("registry entry keyed by TypeId::of::<K>()"),
    }
}
