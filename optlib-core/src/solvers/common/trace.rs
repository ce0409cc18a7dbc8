use std::cell::RefCell;
use std::fmt::Write;

/// One per-iteration diagnostic row.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverTraceRecord {
    pub solver: &'static str,
    pub iter: usize,
    pub f: Option<f64>,
    pub grad_norm: Option<f64>,
    pub alpha: Option<f64>,
    pub dphi0: Option<f64>,
    pub gamma: Option<f64>,
    pub history: Option<usize>,
    pub note: Option<&'static str>,
}

impl SolverTraceRecord {
    fn format_line(&self) -> String {
        let mut line = format!("[{}] iter {:>6}", self.solver, self.iter);
        if let Some(v) = self.f {
            let _ = write!(line, " | f {:>13.6e}", v);
        }
        if let Some(v) = self.grad_norm {
            let _ = write!(line, " | grad {:>13.6e}", v);
        }
        if let Some(v) = self.alpha {
            let _ = write!(line, " | alpha {:>8.3e}", v);
        }
        if let Some(v) = self.dphi0 {
            let _ = write!(line, " | dphi0 {:>13.6e}", v);
        }
        if let Some(v) = self.gamma {
            let _ = write!(line, " | gamma {:>9.3e}", v);
        }
        if let Some(v) = self.history {
            let _ = write!(line, " | m {v}");
        }
        if let Some(note) = self.note {
            let _ = write!(line, " | note {note}");
        }
        line
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct TraceRow {
    iter: usize,
    f: Option<f64>,
    grad_norm: Option<f64>,
    alpha: Option<f64>,
    dphi0: Option<f64>,
    gamma: Option<f64>,
    history: Option<usize>,
    note: Option<&'static str>,
}

impl TraceRow {
    pub(crate) fn iter(iter: usize) -> Self {
        Self {
            iter,
            f: None,
            grad_norm: None,
            alpha: None,
            dphi0: None,
            gamma: None,
            history: None,
            note: None,
        }
    }

    pub(crate) fn f(mut self, f: f64) -> Self {
        self.f = Some(f);
        self
    }

    pub(crate) fn grad_norm(mut self, grad_norm: f64) -> Self {
        self.grad_norm = Some(grad_norm);
        self
    }

    pub(crate) fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub(crate) fn dphi0(mut self, dphi0: f64) -> Self {
        self.dphi0 = Some(dphi0);
        self
    }

    pub(crate) fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = Some(gamma);
        self
    }

    pub(crate) fn history(mut self, len: usize) -> Self {
        self.history = Some(len);
        self
    }

    pub(crate) fn note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }
}

/// Routes trace rows to the `log` facade and, optionally, into a history
/// returned with the report.
#[derive(Clone, Debug)]
pub(crate) struct SolverTracer {
    verbose: bool,
    solver: &'static str,
    history: Option<RefCell<Vec<SolverTraceRecord>>>,
}

impl SolverTracer {
    pub(crate) fn new(solver: &'static str, verbose: bool, collect: bool) -> Self {
        Self {
            verbose,
            solver,
            history: collect.then(|| RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn emit(&self, row: TraceRow) {
        let record = SolverTraceRecord {
            solver: self.solver,
            iter: row.iter,
            f: row.f,
            grad_norm: row.grad_norm,
            alpha: row.alpha,
            dphi0: row.dphi0,
            gamma: row.gamma,
            history: row.history,
            note: row.note,
        };

        if self.verbose {
            log::info!("{}", record.format_line());
        } else {
            log::trace!("{}", record.format_line());
        }

        if let Some(history) = &self.history {
            history.borrow_mut().push(record);
        }
    }

    pub(crate) fn into_history(self) -> Option<Vec<SolverTraceRecord>> {
        self.history.map(RefCell::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_rows_only_when_asked() {
        let tracer = SolverTracer::new("cg", false, true);
        tracer.emit(TraceRow::iter(0).f(1.0).grad_norm(2.0));
        tracer.emit(TraceRow::iter(1).alpha(0.5).note("restart"));
        let rows = tracer.into_history().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].note, Some("restart"));
        assert_eq!(rows[0].solver, "cg");

        let silent = SolverTracer::new("cg", false, false);
        silent.emit(TraceRow::iter(0));
        assert!(silent.into_history().is_none());
    }

    #[test]
    fn formats_only_present_fields() {
        let tracer = SolverTracer::new("lbfgs", false, true);
        tracer.emit(TraceRow::iter(3).gamma(0.25).history(4));
        let line = tracer.into_history().unwrap()[0].format_line();
        assert!(line.starts_with("[lbfgs] iter      3"));
        assert!(line.contains("gamma"));
        assert!(line.contains("| m 4"));
        assert!(!line.contains("grad"));
    }
}
