//! Bounded, subsampled position history used for trail rendering

use std::collections::VecDeque;

use crate::error::{Result, SimError};
use crate::simulation::states::NVec3;

/// Ring buffer of past positions for one body
///
/// Only ticks whose index is a multiple of `sample_interval` are kept, and
/// once `capacity` samples are stored the oldest is evicted first.
#[derive(Debug, Clone)]
pub struct OrbitPathHistory {
    samples: VecDeque<NVec3>,
    capacity: usize,
    sample_interval: u64,
}

impl OrbitPathHistory {
    pub fn new(capacity: usize, sample_interval: u64) -> Result<Self> {
        if capacity == 0 {
            return Err(SimError::ZeroTrailCapacity);
        }
        if sample_interval == 0 {
            return Err(SimError::ZeroTrailInterval);
        }

        Ok(Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            sample_interval,
        })
    }

    /// Record `position` if `tick_index` falls on the sample interval
    /// Returns whether a sample was stored
    pub fn record(&mut self, position: NVec3, tick_index: u64) -> bool {
        if tick_index % self.sample_interval != 0 {
            return false;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(position);
        true
    }

    /// Owned copy of the samples, oldest first
    pub fn snapshot(&self) -> Vec<NVec3> {
        self.samples.iter().copied().collect()
    }

    /// Borrowing iterator over the samples, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &NVec3> + '_ {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<NVec3> {
        self.samples.back().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn sample_interval(&self) -> u64 {
        self.sample_interval
    }
}
