use std::{
    io,
    string::FromUtf8Error,
    sync::{Arc, Mutex},
};

use slip::{
    Report, RunReport, TestTree, harness,
    renderer::{ConsoleRenderer, common::color::SupportsColor},
};

mod sanitize;
pub use sanitize::*;

#[derive(Debug)]
#[allow(dead_code)]
pub enum Error {
    Poison,
    FromUtf8(FromUtf8Error),
}

#[derive(Debug, Default, Clone)]
pub struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("poison error"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SupportsColor for Buffer {
    fn supports_color(&self) -> bool {
        false
    }
}

impl Buffer {
    pub fn try_to_string(&self) -> Result<String, Error> {
        let guard = self.0.lock().map_err(|_| Error::Poison)?;
        String::from_utf8(guard.to_vec()).map_err(Error::FromUtf8)
    }
}

/// Run `tree` with the console renderer writing into a fresh buffer.
pub fn render(tree: &TestTree) -> (RunReport<io::Error>, String) {
    let output = Buffer::default();
    let run = harness(tree)
        .with_renderer(
            ConsoleRenderer::default()
                .with_target(output.clone())
                .with_color_setting(false),
        )
        .run();
    let output = output.try_to_string().unwrap();
    (run, output)
}

pub fn counts(report: &Report) -> (usize, usize, usize) {
    (report.passed(), report.failed(), report.skipped())
}
