/// A set of 16-bit integers, whatever its in-memory representation.
pub trait DenseSet {
    /// Creates an empty set.
    fn new() -> Self
    where
        Self: Sized;

    /// Adds a value to the set.
    ///
    /// If the set did not have this value present, true is returned.
    /// If the set did have this value present, false is returned.
    fn insert(&mut self, value: u16) -> bool;

    /// Returns true if the set contains the value.
    fn contains(&self, value: u16) -> bool;

    /// Returns the number of values in the set.
    fn cardinality(&self) -> usize;

    /// Finds the smallest value in the set.
    fn min(&self) -> Option<u16>;

    /// Finds the largest value in the set.
    fn max(&self) -> Option<u16>;

    /// Returns the approximate in-memory size of the set, in bytes.
    fn mem_size(&self) -> usize;
}
