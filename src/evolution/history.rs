use std::path::PathBuf;

use crate::{error::Result, persistence::HistoryWriter};

pub const BEST_DISTANCE_FILE: &str = "best_distance.txt";
pub const GENERATION_DISTANCE_FILE: &str = "generation_distance.txt";
pub const GENERATION_FITNESS_FILE: &str = "generation_fitness.txt";

/// Per-generation convergence series. All three grow by exactly one entry
/// per generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunHistory {
    best_distance: Vec<f64>,
    generation_distance: Vec<f64>,
    generation_fitness: Vec<f64>,
}

impl RunHistory {
    pub fn with_capacity(generations: usize) -> Self {
        Self {
            best_distance: Vec::with_capacity(generations),
            generation_distance: Vec::with_capacity(generations),
            generation_fitness: Vec::with_capacity(generations),
        }
    }

    pub(crate) fn record(
        &mut self,
        best_distance: f64,
        generation_distance: f64,
        generation_fitness: f64,
    ) {
        self.best_distance.push(best_distance);
        self.generation_distance.push(generation_distance);
        self.generation_fitness.push(generation_fitness);
    }

    /// Distance of the best individual seen so far, per generation.
    pub fn best_distance(&self) -> &[f64] {
        &self.best_distance
    }

    /// Distance of each generation's own best individual.
    pub fn generation_distance(&self) -> &[f64] {
        &self.generation_distance
    }

    /// Fitness of each generation's own best individual.
    pub fn generation_fitness(&self) -> &[f64] {
        &self.generation_fitness
    }

    pub fn len(&self) -> usize {
        self.best_distance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best_distance.is_empty()
    }

    /// Appends the three series to their files under the writer's directory.
    pub fn persist(&self, writer: &HistoryWriter) -> Result<Vec<PathBuf>> {
        Ok(vec![
            writer.append_series(BEST_DISTANCE_FILE, &self.best_distance)?,
            writer.append_series(GENERATION_DISTANCE_FILE, &self.generation_distance)?,
            writer.append_series(GENERATION_FITNESS_FILE, &self.generation_fitness)?,
        ])
    }
}

/// Progress snapshot handed to the observer after each generation. The
/// values describe the best individual seen so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationReport {
    pub generation: usize,
    pub best_distance: f64,
    pub best_fitness: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_series_parallel() {
        let mut history = RunHistory::with_capacity(2);
        assert!(history.is_empty());

        history.record(50.0, 55.0, 0.1);
        history.record(45.0, 45.0, 0.2);

        assert_eq!(history.len(), 2);
        assert_eq!(history.best_distance(), &[50.0, 45.0]);
        assert_eq!(history.generation_distance(), &[55.0, 45.0]);
        assert_eq!(history.generation_fitness(), &[0.1, 0.2]);
    }
}
