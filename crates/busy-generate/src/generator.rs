//! Random assignment generation.

use std::path::Path;

use busy_model::{Assignment, AssignmentTable};
use chrono::{Days, NaiveDate};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::candidates::{person_names, project_names};
use crate::error::{GenerateError, Result};

/// Generator settings. Defaults reproduce the stock sample file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of assignments; record `i` uses `projects[i]`.
    pub records: usize,
    pub resources_per_record: usize,
    /// Inclusive bounds on `end - start` in days.
    pub min_offset_days: u32,
    pub max_offset_days: u32,
    /// Calendar year start dates are sampled from.
    pub year: i32,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub projects: Vec<String>,
    pub people: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            records: 20,
            resources_per_record: 4,
            min_offset_days: 5,
            max_offset_days: 20,
            year: 2024,
            seed: None,
            projects: project_names(),
            people: person_names(),
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// First day of the configured year and the number of days in it.
    fn calendar(&self) -> Result<(NaiveDate, usize)> {
        let first = NaiveDate::from_ymd_opt(self.year, 1, 1)
            .ok_or(GenerateError::InvalidYear(self.year))?;
        let next = NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
            .ok_or(GenerateError::InvalidYear(self.year))?;
        let days = usize::try_from((next - first).num_days())
            .map_err(|_| GenerateError::InvalidYear(self.year))?;
        Ok((first, days))
    }

    /// Check that the configuration can be satisfied.
    ///
    /// # Errors
    ///
    /// Fails when sampling without replacement would run out of projects,
    /// days or people, or the offset bounds are reversed.
    pub fn validate(&self) -> Result<()> {
        if self.records > self.projects.len() {
            return Err(GenerateError::TooManyRecords {
                requested: self.records,
                available: self.projects.len(),
            });
        }
        let (_, days) = self.calendar()?;
        if self.records > days {
            return Err(GenerateError::TooManyDays {
                year: self.year,
                requested: self.records,
                available: days,
            });
        }
        if self.resources_per_record > self.people.len() {
            return Err(GenerateError::TooManyResources {
                requested: self.resources_per_record,
                available: self.people.len(),
            });
        }
        if self.min_offset_days > self.max_offset_days {
            return Err(GenerateError::InvalidOffsetRange {
                min: self.min_offset_days,
                max: self.max_offset_days,
            });
        }
        Ok(())
    }
}

/// Generate assignments using the config's seed (or OS entropy).
pub fn generate(config: &GeneratorConfig) -> Result<AssignmentTable> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    generate_with_rng(config, &mut rng)
}

/// Generate assignments with a caller-supplied RNG.
///
/// Start dates are distinct days of the year, end dates fall
/// `min_offset_days..=max_offset_days` later, and every record draws its
/// resources independently from the full pool.
pub fn generate_with_rng<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<AssignmentTable> {
    config.validate()?;
    let (first_day, days_in_year) = config.calendar()?;
    let day_indices = index::sample(rng, days_in_year, config.records);

    let mut assignments = Vec::with_capacity(config.records);
    for (project, day_index) in config.projects.iter().zip(day_indices.iter()) {
        let start = first_day + Days::new(day_index as u64);
        let offset = rng.random_range(config.min_offset_days..=config.max_offset_days);
        let end = start + Days::new(u64::from(offset));
        let resources: Vec<String> = config
            .people
            .choose_multiple(rng, config.resources_per_record)
            .cloned()
            .collect();
        debug!(project = %project, %start, %end, "generated assignment");
        assignments.push(Assignment::new(project.clone(), start, end, resources)?);
    }
    info!(records = assignments.len(), year = config.year, "generated assignments");
    Ok(AssignmentTable::new(assignments))
}

/// Generate and write the flat file in one step.
///
/// # Errors
///
/// Invalid configuration or a failed write is returned to the caller.
pub fn generate_to_file(path: &Path, config: &GeneratorConfig) -> Result<AssignmentTable> {
    let table = generate(config)?;
    busy_ingest::write_assignments(path, &table)?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;

    #[test]
    fn default_config_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.projects.len(), 20);
        assert_eq!(config.people.len(), 32);
    }

    #[test]
    fn rejects_unsatisfiable_configs() {
        let too_many = GeneratorConfig {
            records: 21,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            too_many.validate(),
            Err(GenerateError::TooManyRecords { requested: 21, available: 20 })
        ));

        let crowded = GeneratorConfig {
            resources_per_record: 33,
            ..GeneratorConfig::default()
        };
        assert!(matches!(crowded.validate(), Err(GenerateError::TooManyResources { .. })));

        let reversed = GeneratorConfig {
            min_offset_days: 9,
            max_offset_days: 3,
            ..GeneratorConfig::default()
        };
        assert!(matches!(reversed.validate(), Err(GenerateError::InvalidOffsetRange { .. })));
    }

    #[test]
    fn leap_year_has_366_days() {
        let (first, days) = GeneratorConfig::default().calendar().unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(days, 366);
    }

    #[test]
    fn record_i_uses_project_i() {
        let config = GeneratorConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let table = generate_with_rng(&config, &mut rng).unwrap();
        let projects: Vec<&str> = table.assignments.iter().map(Assignment::project).collect();
        assert_eq!(projects, crate::candidates::PROJECT_NAMES.to_vec());
    }

    #[test]
    fn seeded_runs_repeat() {
        let config = GeneratorConfig::default().with_seed(Some(42));
        assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
    }
}
