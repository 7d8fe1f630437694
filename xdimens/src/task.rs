use console::{style, Term};
use dimens::{Progress, Resolution, Step};
use std::path::Path;
use std::time::Instant;

/// Prints an `[i/n]` line for every reset and bucket written by a generation run.
pub struct StepPrinter {
    term: Term,
    total: usize,
    done: usize,
    started: Instant,
    verbose: bool,
}

impl StepPrinter {
    pub fn new(term: Term, verbose: bool) -> Self {
        Self {
            term,
            total: 0,
            done: 0,
            started: Instant::now(),
            verbose,
        }
    }

    pub fn done(&self) -> usize {
        self.done
    }

    fn counter(&self) -> String {
        style(format!("[{}/{}]", self.done + 1, self.total))
            .bold()
            .to_string()
    }

    fn line(&self, line: &str) {
        self.term.write_line(line).ok();
    }
}

fn describe(step: Step) -> String {
    match step {
        Step::Reset => "Resetting output directory".into(),
        Step::Bucket(bucket) => format!(
            "Generating {} ({}dpi, x{:?})",
            bucket.dir_name(),
            bucket.density().dpi(),
            bucket.scale()
        ),
    }
}

fn ignored_lines(resolution: &Resolution) -> Vec<String> {
    resolution
        .ignored()
        .iter()
        .map(|name| format!("{} unknown density {}", style("[IGNORED]").yellow(), name))
        .collect()
}

impl Progress for StepPrinter {
    fn plan(&mut self, resolution: &Resolution) {
        self.total = resolution.len() + 1;
        for line in ignored_lines(resolution) {
            self.line(&line);
        }
    }

    fn start(&mut self, step: Step) {
        self.started = Instant::now();
        self.line(&format!("{} {}", self.counter(), describe(step)));
    }

    fn finish(&mut self, _step: Step, path: &Path) {
        if !self.verbose && self.term.is_term() {
            self.term.clear_last_lines(1).ok();
        }
        self.line(&format!(
            "{} {} [{}ms]",
            self.counter(),
            path.display(),
            self.started.elapsed().as_millis()
        ));
        self.done += 1;
    }
}
