//! Aggregated results of one execution.

use std::{borrow::Cow, process::ExitCode};

use crate::outcome::{Status, TestFailure, TestOutcome};

/// One entry of a [`Report`], mirroring the [`TestUnit`](crate::TestUnit) it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultRecord {
    Test {
        desc: Cow<'static, str>,
        outcome: TestOutcome,
    },
    Group {
        desc: Cow<'static, str>,
        report: Report,
    },
    Skipped {
        desc: Cow<'static, str>,
    },
}

impl ResultRecord {
    pub fn desc(&self) -> &str {
        match self {
            ResultRecord::Test { desc, .. }
            | ResultRecord::Group { desc, .. }
            | ResultRecord::Skipped { desc } => desc,
        }
    }

    /// The record's status.
    ///
    /// A group has failed if anything below it failed and has passed otherwise, even when
    /// every child was skipped.
    pub fn status(&self) -> Status {
        match self {
            ResultRecord::Test { outcome, .. } => outcome.status(),
            ResultRecord::Group { report, .. } if report.failed > 0 => Status::Failed,
            ResultRecord::Group { .. } => Status::Passed,
            ResultRecord::Skipped { .. } => Status::Skipped,
        }
    }

    pub fn failure(&self) -> Option<&TestFailure> {
        match self {
            ResultRecord::Test { outcome, .. } => outcome.failure(),
            ResultRecord::Group { .. } | ResultRecord::Skipped { .. } => None,
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            ResultRecord::Group { report, .. } => Some(report),
            ResultRecord::Test { .. } | ResultRecord::Skipped { .. } => None,
        }
    }
}

/// Counters and records of one execution pass over a group.
///
/// The counters always equal the roll-up of the records: every test or skip record counts
/// once and every group record contributes its nested report's counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    passed: usize,
    failed: usize,
    skipped: usize,
    records: Vec<ResultRecord>,
}

impl Report {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_test(&mut self, desc: Cow<'static, str>, outcome: TestOutcome) {
        match outcome {
            TestOutcome::Passed => self.passed += 1,
            TestOutcome::Failed(_) => self.failed += 1,
        }
        self.records.push(ResultRecord::Test { desc, outcome });
    }

    pub(crate) fn record_group(&mut self, desc: Cow<'static, str>, report: Report) {
        self.passed += report.passed;
        self.failed += report.failed;
        self.skipped += report.skipped;
        self.records.push(ResultRecord::Group { desc, report });
    }

    pub(crate) fn record_skip(&mut self, desc: Cow<'static, str>) {
        self.skipped += 1;
        self.records.push(ResultRecord::Skipped { desc });
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn exit_code(&self) -> ExitCode {
        match self.is_success() {
            true => ExitCode::SUCCESS,
            false => ExitCode::FAILURE,
        }
    }

    /// Every failed test in pre-order, including those in nested groups.
    pub fn failures(&self) -> Failures<'_> {
        Failures {
            stack: vec![self.records.iter()],
        }
    }
}

/// Iterator returned by [`Report::failures`].
#[derive(Debug, Clone)]
pub struct Failures<'r> {
    stack: Vec<std::slice::Iter<'r, ResultRecord>>,
}

impl<'r> Iterator for Failures<'r> {
    type Item = (&'r str, &'r TestFailure);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.stack.last_mut()?.next() {
                Some(record) => record,
                None => {
                    self.stack.pop();
                    continue;
                }
            };

            match record {
                ResultRecord::Test {
                    desc,
                    outcome: TestOutcome::Failed(failure),
                } => return Some((desc.as_ref(), failure)),
                ResultRecord::Group { report, .. } if report.failed > 0 => {
                    self.stack.push(report.records.iter())
                }
                _ => {}
            }
        }
    }
}
