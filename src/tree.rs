//! The registered test tree.

use std::borrow::Cow;

use crate::test::TestFnHandle;

/// A single node of a [`TestTree`].
#[derive(Debug)]
pub enum TestUnit {
    /// A leaf with an executable body.
    Test {
        desc: Cow<'static, str>,
        func: TestFnHandle,
    },

    /// A leaf without a body, always reported as skipped.
    Skip { desc: Cow<'static, str> },

    /// A named, ordered collection of nested units.
    Group {
        desc: Cow<'static, str>,
        units: Vec<TestUnit>,
    },
}

impl TestUnit {
    pub fn desc(&self) -> &str {
        match self {
            TestUnit::Test { desc, .. } | TestUnit::Skip { desc } | TestUnit::Group { desc, .. } => {
                desc
            }
        }
    }

    /// Number of test and skip leaves below and including this unit.
    pub fn leaf_count(&self) -> usize {
        match self {
            TestUnit::Test { .. } | TestUnit::Skip { .. } => 1,
            TestUnit::Group { units, .. } => units.iter().map(TestUnit::leaf_count).sum(),
        }
    }
}

/// The finished registration result, rooted at an implicit top-level group.
///
/// A tree cannot be changed once built. It can be executed any number of times and every
/// execution produces its own [`Report`](crate::Report).
#[derive(Debug, Default)]
pub struct TestTree {
    units: Vec<TestUnit>,
}

impl TestTree {
    pub(crate) fn new(units: Vec<TestUnit>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[TestUnit] {
        &self.units
    }

    pub fn leaf_count(&self) -> usize {
        self.units.iter().map(TestUnit::leaf_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
