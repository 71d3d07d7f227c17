// this_file: crates/sigfit-batch/src/lib.rs

#![deny(missing_docs)]

//! Batch fitting infrastructure for sigfit.
//!
//! Takes a JSON job specification, runs the full strategy competition for
//! every job in parallel, and hands back one outcome line per job plus an
//! aggregate summary. Also home to [`rank_fonts`], which tries a whole
//! registry of faces on one name and orders them by fit quality.

pub mod ranking;
pub mod runner;
pub mod types;

pub use ranking::{rank_fonts, FontRankEntry, FontRanking, RankingSummary};
pub use runner::BatchRunner;
pub use types::*;

use std::collections::BTreeSet;

use sigfit_core::analysis::TextAnalysis;

/// Maximum jobs one specification may carry.
pub const MAX_JOBS_PER_SPEC: usize = 1000;

/// Longest job text, in user-perceived characters.
pub const MAX_TEXT_LENGTH: usize = 256;

impl FitJobSpec {
    /// Validate specification structure and parameters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_header()?;

        let mut seen = BTreeSet::new();
        for job in &self.jobs {
            job.validate()?;
            if !seen.insert(job.id.as_str()) {
                return Err(ValidationError::DuplicateJobId(job.id.clone()));
            }
        }

        Ok(())
    }

    /// Validate header-level constraints (version + job counts).
    pub fn validate_header(&self) -> Result<(), ValidationError> {
        // Check version
        if self.version != "1.0" {
            return Err(ValidationError::UnsupportedVersion(self.version.clone()));
        }

        // Check jobs array is non-empty
        if self.jobs.is_empty() {
            return Err(ValidationError::EmptyJobList);
        }

        // Check limit on number of jobs
        if self.jobs.len() > MAX_JOBS_PER_SPEC {
            return Err(ValidationError::TooManyJobs {
                count: self.jobs.len(),
                max: MAX_JOBS_PER_SPEC,
            });
        }

        Ok(())
    }
}

impl FitJob {
    /// Validate individual job parameters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        // Check ID is non-empty
        if self.id.is_empty() {
            return Err(ValidationError::EmptyJobId);
        }

        // Whitespace-only text would just bounce off the measurer later
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyText(self.id.clone()));
        }

        let length = TextAnalysis::of(&self.text).length;
        if length > MAX_TEXT_LENGTH {
            return Err(ValidationError::TextTooLong {
                id: self.id.clone(),
                length,
                max: MAX_TEXT_LENGTH,
            });
        }

        if self.font_id.is_empty() {
            return Err(ValidationError::EmptyFontId(self.id.clone()));
        }

        Ok(())
    }
}

/// Validation errors for job specifications.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Unsupported API version (expected "1.0")
    #[error("Unsupported API version: {0}, expected '1.0'")]
    UnsupportedVersion(String),

    /// Jobs array is empty (must contain at least one job)
    #[error("Jobs array is empty")]
    EmptyJobList,

    /// Too many jobs in specification (exceeds MAX_JOBS_PER_SPEC)
    #[error("Too many jobs: {count} (max: {max})")]
    TooManyJobs {
        /// Number of jobs in specification
        count: usize,
        /// Maximum allowed jobs
        max: usize,
    },

    /// Job ID is empty (must be non-empty string)
    #[error("Job ID is empty")]
    EmptyJobId,

    /// Two jobs share an ID, which would break JSONL correlation
    #[error("Duplicate job ID: {0}")]
    DuplicateJobId(String),

    /// Job text is empty or whitespace only
    #[error("Job '{0}' has empty text")]
    EmptyText(String),

    /// Job text exceeds MAX_TEXT_LENGTH
    #[error("Job '{id}' text is {length} characters (max: {max})")]
    TextTooLong {
        /// Offending job ID
        id: String,
        /// Perceived character count of the text
        length: usize,
        /// Maximum allowed characters
        max: usize,
    },

    /// Job names no font (must be non-empty string)
    #[error("Job '{0}' has no font id")]
    EmptyFontId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_valid_job() -> FitJob {
        FitJob {
            id: "job1".to_owned(),
            text: "John Hancock".to_owned(),
            font_id: "frost".to_owned(),
            device: None,
        }
    }

    #[test]
    fn valid_spec_passes() {
        let spec = FitJobSpec {
            version: "1.0".to_owned(),
            jobs: vec![create_valid_job()],
        };
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn version_must_match() {
        let spec = FitJobSpec {
            version: "2.0".to_owned(),
            jobs: vec![create_valid_job()],
        };
        assert!(matches!(
            spec.validate(),
            Err(ValidationError::UnsupportedVersion(v)) if v == "2.0"
        ));
    }

    #[test]
    fn empty_job_list_is_rejected() {
        let spec = FitJobSpec {
            version: "1.0".to_owned(),
            jobs: vec![],
        };
        assert!(matches!(spec.validate(), Err(ValidationError::EmptyJobList)));
    }

    #[test]
    fn job_count_limit_is_enforced() {
        let jobs: Vec<FitJob> = (0..=MAX_JOBS_PER_SPEC)
            .map(|i| FitJob {
                id: format!("job{i}"),
                ..create_valid_job()
            })
            .collect();
        let spec = FitJobSpec {
            version: "1.0".to_owned(),
            jobs,
        };
        assert!(matches!(
            spec.validate(),
            Err(ValidationError::TooManyJobs { count, .. }) if count == MAX_JOBS_PER_SPEC + 1
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let spec = FitJobSpec {
            version: "1.0".to_owned(),
            jobs: vec![create_valid_job(), create_valid_job()],
        };
        assert!(matches!(
            spec.validate(),
            Err(ValidationError::DuplicateJobId(id)) if id == "job1"
        ));
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut job = create_valid_job();
        job.text = "   ".to_owned();
        assert!(matches!(job.validate(), Err(ValidationError::EmptyText(_))));
    }

    #[test]
    fn oversized_text_is_rejected() {
        let mut job = create_valid_job();
        job.text = "a".repeat(MAX_TEXT_LENGTH + 1);
        assert!(matches!(
            job.validate(),
            Err(ValidationError::TextTooLong { length, .. }) if length == MAX_TEXT_LENGTH + 1
        ));
    }

    #[test]
    fn missing_ids_are_rejected() {
        let mut job = create_valid_job();
        job.id = String::new();
        assert!(matches!(job.validate(), Err(ValidationError::EmptyJobId)));

        let mut job = create_valid_job();
        job.font_id = String::new();
        assert!(matches!(job.validate(), Err(ValidationError::EmptyFontId(_))));
    }

    #[test]
    fn spec_parses_from_json() {
        let json = r#"{
            "version": "1.0",
            "jobs": [
                {"id": "a", "text": "John", "font_id": "frost"},
                {"id": "b", "text": "Jane", "font_id": "ember", "device": "tablet"}
            ]
        }"#;
        let spec: FitJobSpec = serde_json::from_str(json).unwrap();
        assert!(spec.validate().is_ok());
        assert_eq!(spec.jobs[0].device, None);
        assert_eq!(spec.jobs[1].device.as_deref(), Some("tablet"));
    }
}
