use crate::{Config, DenseSet, Stats};
use std::{slice, thread, time::Duration};

/// Sets of a benchmark, all kept alive together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population<S> {
    sets: Vec<S>,
}

impl<S: DenseSet> Population<S> {
    /// Allocates `config.instances` sets and fills each of them.
    pub fn populate(config: &Config) -> Self {
        log::debug!(
            "populating {} sets with {} values each",
            config.instances,
            config.fill_count()
        );

        let mut sets = Vec::with_capacity(config.instances);
        for index in 0..config.instances {
            sets.push(fill(config));
            log::trace!("set {} filled", index);
        }

        Self { sets }
    }

    /// Computes statistics over the whole population.
    pub fn stats(&self) -> Stats {
        Stats {
            nb_instances: self.sets.len(),
            nb_values: self.sets.iter().map(S::cardinality).sum(),
            nb_bytes: self.sets.iter().map(S::mem_size).sum(),
            min_value: self.sets.iter().filter_map(S::min).min(),
            max_value: self.sets.iter().filter_map(S::max).max(),
        }
    }
}

impl<S> Population<S> {
    /// Returns the number of sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if there is no set at all.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Returns the set at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&S> {
        self.sets.get(index)
    }

    /// Returns an iterator over the sets, in allocation order.
    pub fn iter(&self) -> slice::Iter<'_, S> {
        self.sets.iter()
    }
}

impl<'a, S> IntoIterator for &'a Population<S> {
    type Item = &'a S;
    type IntoIter = slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a single set holding every value of the fill.
pub fn fill<S: DenseSet>(config: &Config) -> S {
    let mut set = S::new();

    for value in config.fill_values() {
        set.insert(value);
    }

    set
}

/// Blocks the current thread for `duration`, leaving time to inspect the
/// process from the outside.
pub fn hold(duration: Duration) {
    log::info!("holding for {}s", duration.as_secs());
    thread::sleep(duration);
}
