//! The run driver.
//!
//! [`harness`] executes a [`TestTree`] and hands the finished report to a renderer, the
//! built-in [`ConsoleRenderer`] unless another one is injected with
//! [`Harness::with_renderer`].

use std::{
    io,
    process::ExitCode,
    time::{Duration, Instant},
};

use crate::{
    execute::execute,
    renderer::{ConsoleRenderer, ReportRenderer},
    report::Report,
    tree::TestTree,
};

pub fn harness(tree: &TestTree) -> Harness<'_, ConsoleRenderer<io::Stdout>> {
    Harness {
        tree,
        renderer: ConsoleRenderer::default(),
    }
}

pub struct Harness<'t, Renderer> {
    pub(crate) tree: &'t TestTree,
    pub(crate) renderer: Renderer,
}

impl<'t, Renderer> Harness<'t, Renderer> {
    pub fn with_renderer<WithRenderer>(
        self,
        with_renderer: WithRenderer,
    ) -> Harness<'t, WithRenderer> {
        Harness {
            tree: self.tree,
            renderer: with_renderer,
        }
    }
}

impl<'t, Renderer: ReportRenderer> Harness<'t, Renderer> {
    /// Execute the tree, then render the results and the summary.
    ///
    /// Rendering errors do not stop the run, they are collected in the returned report.
    pub fn run(self) -> RunReport<Renderer::Error> {
        let now = Instant::now();
        let report = execute(self.tree);
        let duration = now.elapsed();

        let mut renderer = self.renderer;
        let mut render_errors = Vec::new();
        render_errors.push_on_error(RenderStage::Results, renderer.render_results(&report));
        render_errors.push_on_error(RenderStage::Summary, renderer.render_summary(&report));

        RunReport {
            report,
            duration,
            render_errors,
        }
    }
}

impl TestTree {
    /// Run with the default console renderer.
    pub fn run(&self) -> RunReport<io::Error> {
        harness(self).run()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderStage {
    Results,
    Summary,
}

trait RenderErrors<E> {
    fn push_on_error(&mut self, stage: RenderStage, result: Result<(), E>);
}

impl<E> RenderErrors<E> for Vec<(RenderStage, E)> {
    fn push_on_error(&mut self, stage: RenderStage, result: Result<(), E>) {
        if let Err(err) = result {
            self.push((stage, err));
        }
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct RunReport<RenderError> {
    pub report: Report,
    pub duration: Duration,
    pub render_errors: Vec<(RenderStage, RenderError)>,
}

impl<RenderError> RunReport<RenderError> {
    /// `SUCCESS` when no test failed, rendering errors are not taken into account.
    pub fn exit_code(&self) -> ExitCode {
        self.report.exit_code()
    }
}
