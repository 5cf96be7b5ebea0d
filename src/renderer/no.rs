use crate::{renderer::ReportRenderer, report::Report};

/// A renderer that produces no output.
///
/// Useful when a report is only inspected programmatically, for example in tests of the
/// engine itself or when another system takes care of reporting.
#[derive(Debug, Default, Clone)]
pub struct NoRenderer;

impl ReportRenderer for NoRenderer {
    type Error = ();

    fn render_results(&mut self, _: &Report) -> Result<(), Self::Error> {
        Ok(())
    }

    fn render_summary(&mut self, _: &Report) -> Result<(), Self::Error> {
        Ok(())
    }
}
