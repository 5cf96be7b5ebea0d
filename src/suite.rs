//! Registration of tests.
//!
//! A [`Suite`] is the group that registration calls currently write into. Group bodies
//! receive a fresh child suite by `&mut`, so whatever a body registers ends up in its own
//! group, and the finished child is appended to the parent once the body returned.
//!
//! ```
//! use slip::{expect, suite};
//!
//! let tree = suite(|s| {
//!     s.describe("math", |s| {
//!         s.it("adds", || expect(1 + 1).to_equal(2));
//!         s.it_each([(1, 2, 3), (2, 2, 4)], "sum", |(a, b, sum)| {
//!             expect(a + b).to_equal(sum)
//!         });
//!         s.todo("divides");
//!     });
//! });
//!
//! assert_eq!(tree.leaf_count(), 4);
//! ```

use std::{borrow::Cow, rc::Rc};

use tracing::error;

use crate::{
    capture::{self, CapturedPanic},
    each::EachCase,
    test::{TestFnHandle, TestResult},
    tree::{TestTree, TestUnit},
};

/// Build a [`TestTree`] by registering into the root group.
pub fn suite<F>(f: F) -> TestTree
where
    F: FnOnce(&mut Suite),
{
    let mut suite = Suite::new();
    f(&mut suite);
    suite.finish()
}

/// The registration context of one group.
#[derive(Debug, Default)]
pub struct Suite {
    units: Vec<TestUnit>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group.
    ///
    /// `f` runs immediately and registers the group's children. If it panics or returns an
    /// error, the failure is logged and the group keeps the children registered up to that
    /// point. Siblings are not affected.
    pub fn describe<F, T>(&mut self, desc: impl Into<Cow<'static, str>>, f: F)
    where
        F: FnOnce(&mut Suite) -> T,
        T: Into<TestResult>,
    {
        let desc = desc.into();
        let mut group = Suite::new();

        match capture::catch(|| -> TestResult { f(&mut group).into() }) {
            Ok(TestResult(Ok(()))) => {}
            Ok(TestResult(Err(error))) => {
                error!(group = %desc, %error, "error while describing group");
            }
            Err(CapturedPanic { message, location }) => {
                error!(
                    group = %desc,
                    error = %message,
                    location = location.as_deref().unwrap_or("<unknown>"),
                    "panic while describing group"
                );
            }
        }

        self.units.push(TestUnit::Group {
            desc,
            units: group.units,
        });
    }

    /// Register a single skip marker in place of a group. `f` is never called.
    pub fn describe_skip<F, T>(&mut self, desc: impl Into<Cow<'static, str>>, _f: F)
    where
        F: FnOnce(&mut Suite) -> T,
        T: Into<TestResult>,
    {
        self.todo(desc);
    }

    /// Register a test.
    pub fn it<F, T>(&mut self, desc: impl Into<Cow<'static, str>>, f: F)
    where
        F: Fn() -> T + 'static,
        T: Into<TestResult>,
    {
        self.units.push(TestUnit::Test {
            desc: desc.into(),
            func: TestFnHandle::from_boxed(f),
        });
    }

    /// Register a skip marker in place of a test. `f` is never called.
    pub fn it_skip<F, T>(&mut self, desc: impl Into<Cow<'static, str>>, _f: F)
    where
        F: Fn() -> T,
        T: Into<TestResult>,
    {
        self.todo(desc);
    }

    /// Register one test per case.
    ///
    /// Every test is named `"<desc> [<case label>]"` and calls `f` with its own copy of
    /// the case. Cases keep their order.
    pub fn it_each<I, C, F, T>(&mut self, cases: I, desc: impl Into<Cow<'static, str>>, f: F)
    where
        I: IntoIterator<Item = C>,
        C: EachCase,
        F: Fn(C) -> T + 'static,
        T: Into<TestResult>,
    {
        let desc = desc.into();
        let f = Rc::new(f);
        for case in cases {
            let name = format!("{desc} [{}]", case.label());
            let f = Rc::clone(&f);
            self.units.push(TestUnit::Test {
                desc: name.into(),
                func: TestFnHandle::from_boxed(move || (*f)(case.clone())),
            });
        }
    }

    /// Register a skip marker, the body-less form of `describe`, `it` and `it_each`.
    pub fn todo(&mut self, desc: impl Into<Cow<'static, str>>) {
        self.units.push(TestUnit::Skip { desc: desc.into() });
    }

    pub fn finish(self) -> TestTree {
        TestTree::new(self.units)
    }
}
