//! Console rendering of run progress.

use std::io::Write;

use kudos::{ProgressReporter, RepositoryLocator};

/// Writes progress lines to a terminal-like writer.
///
/// Pull request progress rewrites a single line with a carriage return, so
/// a repository with hundreds of pull requests still occupies one line.
/// Write failures are logged and otherwise ignored: progress is cosmetic.
pub struct ConsoleProgress<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleProgress<W> {
    /// Creates a reporter writing to `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    fn emit(&mut self, text: &str) {
        let result = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush());
        if let Err(error) = result {
            tracing::warn!("failed to write progress: {error}");
        }
    }
}

impl<W: Write> ProgressReporter for ConsoleProgress<W> {
    fn repository_discovered(&mut self, repository: &RepositoryLocator, pull_requests: usize) {
        self.emit(&format!("Found {pull_requests} PRs for repo '{repository}'.\n"));
    }

    fn discovery_finished(&mut self) {
        self.emit("\n");
    }

    fn pull_request_started(&mut self, repository: &RepositoryLocator, position: usize, total: usize) {
        self.emit(&format!(
            "\rFetching contributors for repo '{repository}'… ({position}/{total}) "
        ));
    }

    fn repository_finished(&mut self, _repository: &RepositoryLocator) {
        self.emit("\n");
    }
}
