//! Rendering of finished reports.
//!
//! A renderer turns a [`Report`] into something a person can read. It is handed the report
//! twice: once to show the result tree and once to show the summary with the failure digest.
//! Both calls only read the report.
//!
//! Implement [`ReportRenderer`] to plug a custom output into
//! [`Harness::with_renderer`](crate::Harness::with_renderer).

use crate::report::Report;

pub mod common;

mod console;
pub use console::*;

mod no;
pub use no::*;

pub trait ReportRenderer {
    type Error;

    /// Render one line per record in pre-order, indented by nesting depth.
    fn render_results(&mut self, report: &Report) -> Result<(), Self::Error>;

    /// Render the totals followed by every failed test and its error.
    fn render_summary(&mut self, report: &Report) -> Result<(), Self::Error>;
}

impl<R: ReportRenderer + ?Sized> ReportRenderer for &mut R {
    type Error = R::Error;

    fn render_results(&mut self, report: &Report) -> Result<(), Self::Error> {
        (**self).render_results(report)
    }

    fn render_summary(&mut self, report: &Report) -> Result<(), Self::Error> {
        (**self).render_summary(report)
    }
}
