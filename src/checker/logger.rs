use std::cell::RefCell;

use super::printer::Printer;

/// A [`Printer`] capturing the output in memory, for assertions in tests.
pub struct Logger {
    output: RefCell<String>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: RefCell::new(String::new()),
        }
    }

    #[must_use]
    pub fn log(&self) -> String {
        self.output.borrow().clone()
    }
}

impl Printer for Logger {
    fn print(&self, output: &str) {
        self.output.borrow_mut().push_str(output);
    }

    fn eprint(&self, output: &str) {
        self.output.borrow_mut().push_str(output);
    }

    fn println(&self, output: &str) {
        self.print(&format!("{output}\n"));
    }

    fn eprintln(&self, output: &str) {
        self.eprint(&format!("{output}\n"));
    }
}
