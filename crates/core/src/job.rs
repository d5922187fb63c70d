//! Cutting-stock problem instances and demand expansion.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a job.
pub type JobId = u64;

/// Issues unique, strictly increasing [`JobId`]s.
///
/// Ids start at 0 and are never reset, so they are unique for the lifetime
/// of one sequence but not stable across process restarts.
#[derive(Debug, Default)]
pub struct IdSequence(AtomicU64);

impl IdSequence {
    /// Creates a sequence starting at id 0.
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Returns the next id.
    ///
    /// The increment is a single atomic read-modify-write, so concurrent
    /// callers always receive distinct ids.
    pub fn next_id(&self) -> JobId {
        self.0.fetch_add(1, AtomicOrdering::Relaxed)
    }
}

/// Process-wide sequence backing [`Job::new`].
static JOB_IDS: IdSequence = IdSequence::new();

/// A required piece length together with how many such pieces are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TargetSize {
    /// Unit length of the required piece.
    pub length: u32,

    /// Number of pieces of that length demanded. Zero is a tolerated no-op.
    pub amount: u32,
}

impl TargetSize {
    /// Creates a target size without validating it.
    pub fn new(length: u32, amount: u32) -> Self {
        Self { length, amount }
    }

    /// Creates a target size, validating its constraints.
    pub fn try_new(length: u32, amount: u32) -> Result<Self> {
        let target = Self { length, amount };
        target.validate()?;
        Ok(target)
    }

    /// Validates the target size and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(Error::Validation(vec![
                "target size length must be positive".to_string(),
            ]));
        }
        Ok(())
    }

    /// Compares two target sizes by length alone.
    ///
    /// Equal lengths compare as `Equal` regardless of amount, giving a
    /// strict weak ordering for solvers that sort demand by length. Not a
    /// [`PartialOrd`] impl, which would have to agree with the field-wise
    /// equality of the type.
    pub fn cmp_by_length(&self, other: &Self) -> Ordering {
        self.length.cmp(&other.length)
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l:{}, n:{}", self.length, self.amount)
    }
}

/// One cutting-stock problem instance.
///
/// A job holds the raw stock length, the width lost to each cut, and the
/// demanded piece lengths. Jobs built with [`Job::new`] carry a
/// process-unique identity and compare by it alone; jobs built with
/// [`Job::try_new`] (or deserialized from external input) are validated,
/// carry no identity, and compare field-wise.
///
/// A job is fixed after construction. Callers wanting a modified job build a
/// new one, which receives a new identity.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Job {
    /// Identity assigned at construction, if any. Never serialized.
    #[cfg_attr(feature = "serde", serde(skip))]
    id: Option<JobId>,

    /// Length of one raw stock unit.
    pub length_stock: u32,

    /// Demanded piece lengths, in declaration order.
    pub target_sizes: Vec<TargetSize>,

    /// Material lost per cut (kerf).
    #[cfg_attr(feature = "serde", serde(default))]
    pub cut_width: u32,
}

impl Job {
    /// Creates an identity-bearing job.
    ///
    /// Draws a fresh id from the process-wide sequence and performs no field
    /// validation. The cut width starts at 0, see [`Job::with_cut_width`].
    pub fn new(length_stock: u32, target_sizes: Vec<TargetSize>) -> Self {
        Self::with_id(JOB_IDS.next_id(), length_stock, target_sizes)
    }

    /// Creates an identity-bearing job from an explicitly issued id.
    ///
    /// Callers that own an [`IdSequence`] can issue ids themselves instead
    /// of relying on the process-wide sequence.
    pub fn with_id(id: JobId, length_stock: u32, target_sizes: Vec<TargetSize>) -> Self {
        Self {
            id: Some(id),
            length_stock,
            target_sizes,
            cut_width: 0,
        }
    }

    /// Creates an identity-less job, validating every field constraint.
    ///
    /// All violations are collected into a single [`Error::Validation`].
    pub fn try_new(length_stock: u32, target_sizes: Vec<TargetSize>) -> Result<Self> {
        let job = Self {
            id: None,
            length_stock,
            target_sizes,
            cut_width: 0,
        };
        job.validate()?;
        Ok(job)
    }

    /// Sets the cut width (kerf).
    pub fn with_cut_width(mut self, cut_width: u32) -> Self {
        self.cut_width = cut_width;
        self
    }

    /// Returns the identity assigned at construction, if any.
    ///
    /// Stable for the whole lifetime of the instance.
    pub fn id(&self) -> Option<JobId> {
        self.id
    }

    /// Validates the job, listing every violated constraint.
    pub fn validate(&self) -> Result<()> {
        let mut issues = Vec::new();
        if self.length_stock == 0 {
            issues.push("stock length must be positive".to_string());
        }
        for (i, target) in self.target_sizes.iter().enumerate() {
            if target.length == 0 {
                issues.push(format!("target size {i}: length must be positive"));
            }
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(issues))
        }
    }

    /// Yields every demanded piece length, expanding each target size
    /// `amount` times in declaration order.
    ///
    /// The iterator is lazy and produced fresh on every call; memory stays
    /// proportional to the number of distinct target sizes.
    pub fn sizes(&self) -> impl Iterator<Item = u32> + '_ {
        self.target_sizes
            .iter()
            .flat_map(|target| std::iter::repeat(target.length).take(target.amount as usize))
    }

    /// Returns the total piece count, the sum of amounts across all target
    /// sizes. Equals `self.sizes().count()`.
    pub fn len(&self) -> usize {
        self.target_sizes
            .iter()
            .map(|target| target.amount as usize)
            .sum()
    }

    /// Returns true if the job demands no pieces.
    pub fn is_empty(&self) -> bool {
        self.target_sizes.iter().all(|target| target.amount == 0)
    }
}

impl PartialEq for Job {
    /// Identity equality when both jobs carry an id, field equality when
    /// neither does. A job with identity never equals one without.
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => {
                self.length_stock == other.length_stock
                    && self.cut_width == other.cut_width
                    && self.target_sizes == other.target_sizes
            }
            _ => false,
        }
    }
}

impl Eq for Job {}

impl Hash for Job {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with `eq`: equal jobs always hash through the same arm.
        match self.id {
            Some(id) => id.hash(state),
            None => {
                self.length_stock.hash(state);
                self.cut_width.hash(state);
                self.target_sizes.hash(state);
            }
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_deserialized_job_has_no_identity() {
        let job = Job::new(1000, vec![TargetSize::new(500, 2)]).with_cut_width(3);
        let json = serde_json::to_string(&job).unwrap();
        let parsed: Job = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id(), None);
        assert_eq!(parsed.length_stock, 1000);
        assert_eq!(parsed.cut_width, 3);
        assert_eq!(parsed.target_sizes, job.target_sizes);
    }

    #[test]
    fn test_cut_width_defaults_to_zero() {
        let json = r#"{"length_stock":100,"target_sizes":[{"length":10,"amount":2}]}"#;
        let parsed: Job = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.cut_width, 0);
        assert!(parsed.validate().is_ok());
    }
}
