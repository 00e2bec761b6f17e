use std::{ops::Range, time::Duration};

/// Number of distinct 16-bit integers.
pub const DOMAIN_SIZE: usize = 1 << 16;

/// How long a populator keeps its sets alive once they are filled.
pub const HOLD_DURATION: Duration = Duration::from_secs(60);

/// Number of sets allocated by a populator.
const DEFAULT_INSTANCES: usize = 100;

/// Exclusive upper bound of the fill: 65535 itself is never inserted.
const DEFAULT_FILL_BOUND: u16 = 0xFFFF;

/// Benchmark parameters.
///
/// The populators always run with [`Config::default`], smaller values are
/// only meant for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of sets allocated and kept alive.
    pub instances: usize,
    /// Exclusive upper bound of the values inserted in each set.
    pub fill_bound: u16,
}

impl Config {
    /// Returns the values inserted into every set, in ascending order.
    pub fn fill_values(&self) -> Range<u16> {
        0..self.fill_bound
    }

    /// Returns the number of values inserted into every set.
    pub fn fill_count(&self) -> usize {
        usize::from(self.fill_bound)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            instances: DEFAULT_INSTANCES,
            fill_bound: DEFAULT_FILL_BOUND,
        }
    }
}
