use pretty_assertions::assert_eq;
use slip::{ExpectationError, ResultRecord, Status, execute, expect, suite};

use crate::lib::counts;

#[test]
fn single_passing_test_in_a_group() {
    let tree = suite(|s| s.describe("math", |s| s.it("adds", || expect(1 + 1).to_equal(2))));

    let report = execute(&tree);
    assert_eq!(counts(&report), (1, 0, 0));
    assert_eq!(report.records()[0].desc(), "math");
    assert_eq!(report.records()[0].status(), Status::Passed);
}

#[test]
fn failing_matcher_is_captured_with_its_message() {
    let tree = suite(|s| s.it("fails", || expect(1).to_equal(2)));

    let report = execute(&tree);
    assert_eq!(counts(&report), (0, 1, 0));

    let failures: Vec<_> = report
        .failures()
        .map(|(desc, failure)| (desc, failure.message()))
        .collect();
    assert_eq!(failures, vec![("fails", "expect(1).to_equal(2)")]);
}

#[test]
fn each_case_becomes_its_own_passing_test() {
    let tree = suite(|s| {
        s.it_each([(1, 2, 3), (2, 2, 4)], "sum", |(a, b, sum)| {
            expect(a + b).to_equal(sum)
        })
    });

    let report = execute(&tree);
    assert_eq!(counts(&report), (2, 0, 0));

    let names: Vec<_> = report.records().iter().map(ResultRecord::desc).collect();
    assert_eq!(names, vec!["sum [1,2,3]", "sum [2,2,4]"]);
}

#[test]
fn test_without_body_is_skipped() {
    let tree = suite(|s| s.todo("todo"));

    let report = execute(&tree);
    assert_eq!(counts(&report), (0, 0, 1));
    assert!(matches!(
        &report.records()[0],
        ResultRecord::Skipped { desc } if desc == "todo"
    ));
}

#[test]
fn unknown_matcher_is_rejected_by_name() {
    assert_eq!(
        expect(5).by_name("toBeAwesome", 5),
        Err(ExpectationError::Unsupported {
            name: String::from("toBeAwesome")
        })
    );
    assert_eq!(
        expect(5).by_name("toBeAwesome", 5).unwrap_err().to_string(),
        "expect(...).toBeAwesome is not a supported expectation."
    );
}

#[test]
fn matchers_chain_with_question_mark() {
    let tree = suite(|s| {
        s.it("stops at the first failure", || -> Result<(), ExpectationError> {
            expect("a").to_equal("a")?;
            expect(0.5).to_be_precisely_to(0.25, 1)?;
            expect(true).to_equal(false)
        })
    });

    let report = execute(&tree);
    let (_, failure) = report.failures().next().unwrap();
    assert_eq!(failure.message(), "expect(0.5).to_be_precisely(0.25, 1)");
}
