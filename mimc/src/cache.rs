//! Memoization of round constant schedules.
//!
//! A schedule is a pure function of its configuration, so entries never need
//! to be invalidated.

use crate::{
    constants::MimcConfig,
    error::Result,
    generator::{round_constants, RoundConstants},
};
use ark_bn254::Fr;
use log::debug;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

#[derive(Debug, Default)]
pub struct ConstantsCache {
    entries: Mutex<HashMap<MimcConfig, Arc<RoundConstants<Fr>>>>,
}

impl ConstantsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached schedule for `config`, deriving it on a miss.
    /// Failures are returned to the caller and not cached.
    pub fn get_or_generate(&self, config: &MimcConfig) -> Result<Arc<RoundConstants<Fr>>> {
        if let Some(constants) = self.lock().get(config) {
            return Ok(Arc::clone(constants));
        }

        debug!("Round constant cache miss for seed {:?}", config.seed);
        // derived without holding the lock, the first insertion wins
        let constants = Arc::new(round_constants(config)?);
        let mut entries = self.lock();
        let entry = entries.entry(config.clone()).or_insert(constants);
        Ok(Arc::clone(entry))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<MimcConfig, Arc<RoundConstants<Fr>>>> {
        // entries are immutable once inserted, a poisoned map is still consistent
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
