//! A small describe/it test engine.
//!
//! Tests are registered into a tree of groups with a [`Suite`], executed depth-first into a
//! [`Report`] and printed by a [`ReportRenderer`]. Inside test bodies, [`expect`] offers a
//! closed set of matchers.
//!
//! ```no_run
//! use std::process::ExitCode;
//!
//! use slip::{expect, suite};
//!
//! fn main() -> ExitCode {
//!     let tree = suite(|s| {
//!         s.describe("math", |s| {
//!             s.it("adds", || expect(1 + 1).to_equal(2));
//!             s.it("divides", || expect(1.0 / 3.0).to_be_precisely(0.333333));
//!         });
//!         s.todo("subtracts");
//!     });
//!
//!     tree.run().exit_code()
//! }
//! ```

pub mod capture;
pub mod outcome;
pub mod renderer;

mod each;
pub use each::*;

mod execute;
pub use execute::*;

mod expect;
pub use expect::*;

mod harness;
pub use harness::*;

mod report;
pub use report::*;

mod suite;
pub use suite::*;

mod tree;
pub use tree::*;

pub use outcome::Status;
