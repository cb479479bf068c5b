//! One fixed stdout line per lifecycle event.
//!
//! Under test the lines are additionally captured into a thread-local
//! buffer so construction/drop ordering can be asserted. The buffer is
//! per-thread and the test harness runs each test on its own thread, so
//! tests never see each other's lines.

pub(crate) fn emit(line: &str) {
    println!("{line}");
    #[cfg(test)]
    capture::record(line);
}

#[cfg(test)]
pub(crate) mod capture {
    use std::cell::RefCell;

    thread_local! {
        static LINES: RefCell<Vec<String>> = RefCell::new(Vec::new());
    }

    pub(crate) fn record(line: &str) {
        LINES.with(|lines| lines.borrow_mut().push(line.to_string()));
    }

    /// Drains everything emitted on this thread so far.
    pub(crate) fn take() -> Vec<String> {
        LINES.with(|lines| lines.borrow_mut().drain(..).collect())
    }
}
