/// Where the probe writes its check outcome.
///
/// Monitoring engines parse the first line of the process output, so the
/// service reports through this trait instead of printing directly. That also
/// lets tests capture the output with the [`logger::Logger`](super::logger::Logger)
/// instead of the [`console::Console`](super::console::Console).
pub trait Printer {
    fn print(&self, output: &str);
    fn eprint(&self, output: &str);
    fn println(&self, output: &str);
    fn eprintln(&self, output: &str);
}
