use std::fmt::Display;

use crate::test::TestResult;

/// The status glyph class of a single result record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Passed,
    Failed,
    Skipped,
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Status::Passed => "passed",
            Status::Failed => "failed",
            Status::Skipped => "skipped",
        })
    }
}

/// How an executed test ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    Passed,
    Failed(TestFailure),
}

impl TestOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, TestOutcome::Passed)
    }

    pub fn failed(&self) -> bool {
        matches!(self, TestOutcome::Failed(_))
    }

    pub fn status(&self) -> Status {
        match self {
            TestOutcome::Passed => Status::Passed,
            TestOutcome::Failed(_) => Status::Failed,
        }
    }

    pub fn failure(&self) -> Option<&TestFailure> {
        match self {
            TestOutcome::Passed => None,
            TestOutcome::Failed(failure) => Some(failure),
        }
    }
}

impl From<TestResult> for TestOutcome {
    fn from(value: TestResult) -> Self {
        match value.0 {
            Ok(_) => TestOutcome::Passed,
            Err(err) => TestOutcome::Failed(TestFailure::Error(err)),
        }
    }
}

/// The captured error of a failed test.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestFailure {
    /// The body returned an `Err`.
    Error(String),

    /// The body panicked.
    Panicked {
        message: String,
        location: Option<String>,
    },
}

impl TestFailure {
    pub fn message(&self) -> &str {
        match self {
            TestFailure::Error(message) | TestFailure::Panicked { message, .. } => message,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            TestFailure::Error(_) => None,
            TestFailure::Panicked { location, .. } => location.as_deref(),
        }
    }
}

impl Display for TestFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestFailure::Error(message) => write!(f, "Error: {message}"),
            TestFailure::Panicked {
                message,
                location: Some(location),
            } => write!(f, "panicked at {location}:\n{message}"),
            TestFailure::Panicked {
                message,
                location: None,
            } => write!(f, "panicked:\n{message}"),
        }
    }
}
