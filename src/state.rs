use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{config::AppConfig, store::Inventory};

/// Shared handle to the booking service. One instance per process (or per
/// test); the inventory behind it has no other owner.
#[derive(Clone)]
pub struct AppState {
    inventory: Arc<Mutex<Inventory>>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let inventory = if config.seed_demo_flights {
            Inventory::with_demo_flights()
        } else {
            Inventory::new()
        };
        Self::with_inventory(config, inventory)
    }

    pub fn with_inventory(config: AppConfig, inventory: Inventory) -> Self {
        Self {
            inventory: Arc::new(Mutex::new(inventory)),
            config,
        }
    }

    /// Single-writer lock over the whole inventory. A poisoned lock is
    /// recovered; validation precedes mutation in every operation, so the
    /// store is consistent even if a holder panicked.
    pub fn inventory(&self) -> MutexGuard<'_, Inventory> {
        self.inventory.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
