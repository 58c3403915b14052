//! Step strategy selection.
//!
//! Every strategy computes the same next generation; they differ only in
//! how the rows are scheduled.

/// Grids with at least this many cells step in parallel under `Auto`.
pub const PARALLEL_THRESHOLD: usize = 65_536;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StepStrategy {
    /// One row at a time on the calling thread
    Serial,
    /// Rows spread over the rayon pool
    Parallel,
    /// Parallel for large grids, serial otherwise
    #[default]
    Auto,
}

impl StepStrategy {
    pub fn all() -> Vec<StepStrategy> {
        vec![StepStrategy::Serial, StepStrategy::Parallel, StepStrategy::Auto]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StepStrategy::Serial => "Serial",
            StepStrategy::Parallel => "Parallel",
            StepStrategy::Auto => "Auto",
        }
    }

    /// Whether a grid of `cell_count` cells should use rayon
    pub fn is_parallel_for(&self, cell_count: usize) -> bool {
        match self {
            StepStrategy::Serial => false,
            StepStrategy::Parallel => true,
            StepStrategy::Auto => cell_count >= PARALLEL_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_auto() {
        assert_eq!(StepStrategy::default(), StepStrategy::Auto);
    }

    #[test]
    fn test_auto_switches_at_threshold() {
        assert!(!StepStrategy::Auto.is_parallel_for(PARALLEL_THRESHOLD - 1));
        assert!(StepStrategy::Auto.is_parallel_for(PARALLEL_THRESHOLD));
        assert!(!StepStrategy::Serial.is_parallel_for(usize::MAX));
        assert!(StepStrategy::Parallel.is_parallel_for(1));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = StepStrategy::all().iter().map(|s| s.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), StepStrategy::all().len());
    }
}
