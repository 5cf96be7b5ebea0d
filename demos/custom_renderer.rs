use std::io::{self, Stdout, Write};

use slip::{Report, ResultRecord, Status, expect, harness, renderer::ReportRenderer, suite};

/// Prints results in the Test Anything Protocol.
struct TapRenderer {
    target: Stdout,
    counter: usize,
}

impl TapRenderer {
    fn render_records(&mut self, records: &[ResultRecord], path: &str) -> io::Result<()> {
        for record in records {
            let name = match path {
                "" => record.desc().to_string(),
                path => format!("{path} > {}", record.desc()),
            };

            if let Some(report) = record.report() {
                self.render_records(report.records(), &name)?;
                continue;
            }

            self.counter += 1;
            match record.status() {
                Status::Passed => writeln!(self.target, "ok {} - {name}", self.counter)?,
                Status::Skipped => writeln!(self.target, "ok {} - {name} # SKIP", self.counter)?,
                Status::Failed => writeln!(self.target, "not ok {} - {name}", self.counter)?,
            }

            if let Some(failure) = record.failure() {
                for line in failure.message().lines() {
                    writeln!(self.target, "# {line}")?;
                }
            }
        }
        Ok(())
    }
}

impl ReportRenderer for TapRenderer {
    type Error = io::Error;

    fn render_results(&mut self, report: &Report) -> io::Result<()> {
        writeln!(self.target, "TAP version 13")?;
        self.render_records(report.records(), "")
    }

    fn render_summary(&mut self, report: &Report) -> io::Result<()> {
        writeln!(self.target, "1..{}", report.total())
    }
}

fn main() {
    let tree = suite(|s| {
        s.describe("strings", |s| {
            s.it("concat", || expect(format!("{}{}", "a", "b")).to_equal("ab"));
            s.it("uppercase", || expect("abc".to_uppercase()).to_equal("ABc"));
        });
        s.todo("unicode");
    });

    let run = harness(&tree)
        .with_renderer(TapRenderer {
            target: io::stdout(),
            counter: 0,
        })
        .run();

    for (stage, err) in run.render_errors {
        eprintln!("failed to render {stage:?}: {err}");
    }
}
