/// Formats a message and draws it on a `StatusLine`, like `write!` does for writers.
///
/// ```no_run
/// use status_line::{status, StatusLine};
///
/// let line = StatusLine::new();
/// for i in 0..10 {
///     status!(line, "step {} out of {}", i, 10)?;
/// }
/// line.done()?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[macro_export]
macro_rules! status {
    ($line:expr, $($arg:tt)*) => {
        $line.print_fmt(::std::format_args!($($arg)*))
    };
}

pub mod status;
pub mod terminal;

pub use status::{StatusLine, ESC_PREFIX};
pub use terminal::Terminal;
