use std::io;

use crate::{
    outcome::Status,
    renderer::{
        ReportRenderer,
        common::{
            INDENT,
            color::{ColorSetting, SupportsColor, colors::*, no_color_requested, status_color},
            glyph, glyphs,
        },
    },
    report::{Report, ResultRecord},
};

/// The default renderer, a tree view followed by a summary and a failure digest.
///
/// ```text
/// ✔ math
///   ✔ adds
/// ✗ fails
///   ↳ expect(1).to_equal(2)
/// - todo
///
/// Results
///   Passed:  1
///   Failed:  1
///   Skipped: 1
///
/// failures:
///
/// ---- fails ----
/// Error: expect(1).to_equal(2)
/// ```
#[derive(Debug)]
pub struct ConsoleRenderer<W: io::Write> {
    target: W,
    color_setting: ColorSetting,
}

impl Default for ConsoleRenderer<io::Stdout> {
    fn default() -> Self {
        Self {
            target: io::stdout(),
            color_setting: Default::default(),
        }
    }
}

impl<W: io::Write> ConsoleRenderer<W> {
    pub fn with_target<WithTarget: io::Write>(
        self,
        with_target: WithTarget,
    ) -> ConsoleRenderer<WithTarget> {
        ConsoleRenderer {
            target: with_target,
            color_setting: self.color_setting,
        }
    }

    pub fn with_color_setting(self, color_setting: impl Into<ColorSetting>) -> Self {
        ConsoleRenderer {
            color_setting: color_setting.into(),
            ..self
        }
    }

    pub fn into_target(self) -> W {
        self.target
    }
}

impl<W: io::Write + SupportsColor> ConsoleRenderer<W> {
    /// Return whether this renderer will currently emit colored output.
    pub fn use_color(&self) -> bool {
        match self.color_setting {
            ColorSetting::Automatic => !no_color_requested() && self.target.supports_color(),
            ColorSetting::Always => true,
            ColorSetting::Never => false,
        }
    }

    fn render_records(
        &mut self,
        records: &[ResultRecord],
        depth: usize,
        color: bool,
    ) -> io::Result<()> {
        let indent = INDENT.repeat(depth);
        for record in records {
            let status = record.status();
            let glyph = glyph(status);
            let desc = record.desc();
            match color {
                true => writeln!(
                    self.target,
                    "{indent}{}{glyph} {desc}{RESET}",
                    status_color(status)
                )?,
                false => writeln!(self.target, "{indent}{glyph} {desc}")?,
            }

            if let Some(failure) = record.failure() {
                let error = glyphs::ERROR;
                let message = failure.message();
                match color {
                    true => writeln!(
                        self.target,
                        "{indent}{INDENT}{RED}{error} {message}{RESET}"
                    )?,
                    false => writeln!(self.target, "{indent}{INDENT}{error} {message}")?,
                }
            }

            if let Some(report) = record.report() {
                self.render_records(report.records(), depth + 1, color)?;
            }
        }
        Ok(())
    }

    fn render_count(
        &mut self,
        label: &str,
        count: usize,
        status: Status,
        color: bool,
    ) -> io::Result<()> {
        match (count, color) {
            (0, _) | (_, false) => writeln!(self.target, "{INDENT}{label:<9}{count}"),
            (_, true) => writeln!(
                self.target,
                "{INDENT}{label:<9}{}{count}{RESET}",
                status_color(status)
            ),
        }
    }
}

impl<W: io::Write + SupportsColor> ReportRenderer for ConsoleRenderer<W> {
    type Error = io::Error;

    fn render_results(&mut self, report: &Report) -> Result<(), Self::Error> {
        let color = self.use_color();
        self.render_records(report.records(), 0, color)
    }

    fn render_summary(&mut self, report: &Report) -> Result<(), Self::Error> {
        let color = self.use_color();

        writeln!(self.target)?;
        match color {
            true => writeln!(self.target, "{BOLD}Results{RESET}")?,
            false => writeln!(self.target, "Results")?,
        }
        self.render_count("Passed:", report.passed(), Status::Passed, color)?;
        self.render_count("Failed:", report.failed(), Status::Failed, color)?;
        self.render_count("Skipped:", report.skipped(), Status::Skipped, color)?;

        let mut failures = report.failures().peekable();
        if failures.peek().is_none() {
            return Ok(());
        }

        writeln!(self.target)?;
        writeln!(self.target, "failures:")?;
        for (desc, failure) in failures {
            writeln!(self.target)?;
            match color {
                true => writeln!(self.target, "{RED}---- {desc} ----{RESET}")?,
                false => writeln!(self.target, "---- {desc} ----")?,
            }
            writeln!(self.target, "{failure}")?;
        }
        Ok(())
    }
}
