use std::{
    cell::Cell,
    rc::Rc,
    sync::atomic::{AtomicUsize, Ordering},
};

use pretty_assertions::assert_eq;
use slip::{ResultRecord, Status, Suite, TestTree, execute, expect, suite};

use crate::lib::counts;

fn mixed_tree() -> TestTree {
    suite(|s| {
        s.it("top passes", || ());
        s.it("top fails", || Err::<(), _>("no"));
        s.describe("level one", |s| {
            s.todo("pending");
            s.it_skip("skipped", || ());
            s.describe("level two", |s| {
                s.it("deep passes", || expect(2).to_equal(2));
                s.it("deep panics", || -> () { panic!("deep") });
                s.describe_skip("never", |s| s.it("hidden", || ()));
            });
            s.describe("empty", |_| ());
        });
        s.it_each([[1, 1], [2, 3]], "same", |[a, b]| expect(a).to_equal(b));
    })
}

#[test]
fn counters_match_the_number_of_leaves() {
    let tree = mixed_tree();
    let report = execute(&tree);

    assert_eq!(report.total(), tree.leaf_count());
    assert_eq!(counts(&report), (3, 3, 3));
}

#[test]
fn group_counters_roll_up_exactly() {
    fn check(records: &[ResultRecord]) -> (usize, usize, usize) {
        records.iter().fold((0, 0, 0), |(p, f, s), record| match record {
            ResultRecord::Test { outcome, .. } if outcome.passed() => (p + 1, f, s),
            ResultRecord::Test { .. } => (p, f + 1, s),
            ResultRecord::Skipped { .. } => (p, f, s + 1),
            ResultRecord::Group { report, .. } => {
                let nested = check(report.records());
                assert_eq!(nested, counts(report));
                (p + nested.0, f + nested.1, s + nested.2)
            }
        })
    }

    let report = execute(&mixed_tree());
    assert_eq!(check(report.records()), counts(&report));
}

#[test]
fn group_with_only_skips_has_passed() {
    let tree = suite(|s| {
        s.describe("all skipped", |s| {
            s.todo("a");
            s.it_skip("b", || ());
            s.describe_skip("c", |_| ());
        })
    });

    let report = execute(&tree);
    assert_eq!(report.records()[0].status(), Status::Passed);
    assert_eq!(counts(&report), (0, 0, 3));
}

#[test]
fn skipped_group_body_never_runs() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);

    let tree = suite(|s| {
        s.describe_skip("skipped", |s: &mut Suite| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            s.it("inner", || {
                CALLS.fetch_add(1, Ordering::SeqCst);
            });
        });
    });

    let report = execute(&tree);
    assert_eq!(CALLS.load(Ordering::SeqCst), 0);
    assert_eq!(report.records().len(), 1);
    assert_eq!(report.records()[0].desc(), "skipped");
    assert_eq!(counts(&report), (0, 0, 1));
}

#[test]
fn each_registers_one_leaf_per_case_in_order() {
    let cases = vec![(1usize, "one"), (2, "two"), (3, "three")];
    let tree = suite(|s| {
        s.it_each(cases.clone(), "pair", |(n, name)| {
            expect(name.len() >= n).to_equal(true)
        })
    });

    assert_eq!(tree.leaf_count(), cases.len());
    let names: Vec<_> = tree.units().iter().map(|unit| unit.desc()).collect();
    assert_eq!(names, vec!["pair [1,one]", "pair [2,two]", "pair [3,three]"]);
}

#[test]
fn precise_matcher_respects_the_exclusive_bound() {
    for precision in 0..10 {
        assert_eq!(expect(0.125).to_be_precisely_to(0.125, precision), Ok(()));
    }

    for precision in 0..10 {
        let tolerance = 10f64.powi(-(precision as i32));
        assert!(
            expect(0.0).to_be_precisely_to(tolerance, precision).is_err(),
            "precision {precision} should reject {tolerance}"
        );
        assert_eq!(expect(0.0).to_be_precisely_to(tolerance / 2.0, precision), Ok(()));
    }

    assert!(expect(1.0).to_be_precisely_to(1.1, 1).is_err());
    assert!(expect(1.0).to_be_precisely_to(1.01, 2).is_err());

    for precision in [1 << 31, u32::MAX] {
        assert_eq!(expect(1.0).to_be_precisely_to(1.0, precision), Ok(()));
        assert!(expect(1.0).to_be_precisely_to(5.0, precision).is_err());
    }
}

#[test]
fn empty_tree_runs_to_an_empty_passing_report() {
    let tree = suite(|_| ());
    assert!(tree.is_empty());
    assert_eq!(tree.leaf_count(), 0);

    let report = execute(&tree);
    assert_eq!(counts(&report), (0, 0, 0));
    assert!(report.records().is_empty());
    assert!(report.is_success());

    let tree = suite(|s| s.describe("hollow", |_| ()));
    assert!(!tree.is_empty());
    assert_eq!(tree.leaf_count(), 0);
}

#[test]
fn rerunning_a_tree_repeats_its_bodies() {
    let runs = Rc::new(Cell::new(0));
    let tree = suite(|s| {
        let runs = Rc::clone(&runs);
        s.it("counts", move || runs.set(runs.get() + 1));
    });

    let first = execute(&tree);
    let second = execute(&tree);
    assert_eq!(runs.get(), 2);
    assert_eq!(first, second);
}
