//! Depth-first execution of a [`TestTree`].

use tracing::{debug, debug_span, trace};

use crate::{
    capture,
    outcome::{TestFailure, TestOutcome},
    report::Report,
    test::TestFnHandle,
    tree::{TestTree, TestUnit},
};

/// Execute every unit of `tree` in registration order and collect a fresh [`Report`].
///
/// Failures of single tests, returned errors and panics alike, are recorded and never stop
/// the run.
pub fn execute(tree: &TestTree) -> Report {
    let report = execute_units(tree.units());
    debug!(
        passed = report.passed(),
        failed = report.failed(),
        skipped = report.skipped(),
        "execution finished"
    );
    report
}

fn execute_units(units: &[TestUnit]) -> Report {
    let mut report = Report::new();
    for unit in units {
        match unit {
            TestUnit::Test { desc, func } => {
                trace!(test = %desc, "running test");
                let outcome = run_test(func);
                debug!(test = %desc, status = %outcome.status(), "test finished");
                report.record_test(desc.clone(), outcome);
            }
            TestUnit::Skip { desc } => {
                trace!(test = %desc, "skipping test");
                report.record_skip(desc.clone());
            }
            TestUnit::Group { desc, units } => {
                let sub_report =
                    debug_span!("group", group = %desc).in_scope(|| execute_units(units));
                report.record_group(desc.clone(), sub_report);
            }
        }
    }
    report
}

fn run_test(func: &TestFnHandle) -> TestOutcome {
    match capture::catch(|| func.call()) {
        Ok(result) => result.into(),
        Err(panic) => TestOutcome::Failed(TestFailure::from(panic)),
    }
}
