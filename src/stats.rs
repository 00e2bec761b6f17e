use humansize::{file_size_opts as options, FileSize};
use std::fmt;

/// Aggregated statistics over a population of sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Number of sets.
    pub nb_instances: usize,
    /// Total number of values stored, summed over every set.
    pub nb_values: usize,
    /// Total number of allocated bytes (approximated).
    pub nb_bytes: usize,
    /// The minimal value, `None` if every set is empty.
    pub min_value: Option<u16>,
    /// The maximal value, `None` if every set is empty.
    pub max_value: Option<u16>,
}

impl Stats {
    /// Average number of bytes per stored value, `None` without values.
    // Approximation is fine for a ratio.
    #[allow(clippy::cast_precision_loss)]
    pub fn bytes_per_value(&self) -> Option<f64> {
        (self.nb_values != 0)
            .then(|| self.nb_bytes as f64 / self.nb_values as f64)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sets, {} values, {}",
            self.nb_instances,
            self.nb_values,
            human_size(self.nb_bytes)
        )?;
        if let (Some(min), Some(max)) = (self.min_value, self.max_value) {
            write!(f, ", range [{min}, {max}]")?;
        }
        if let Some(ratio) = self.bytes_per_value() {
            write!(f, ", {ratio:.2} B/value")?;
        }
        Ok(())
    }
}

/// Formats a byte count with decimal units.
pub(crate) fn human_size(bytes: usize) -> String {
    bytes
        .file_size(options::DECIMAL)
        .unwrap_or_else(|_| format!("{bytes} B"))
}
