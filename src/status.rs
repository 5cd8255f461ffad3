use crate::terminal::Terminal;
use std::fmt;
use std::io::{self, Stdout, Write};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Erase the entire current line, then move the cursor back to its start
pub const ESC_PREFIX: &[u8] = b"\x1b[2K\r";

/// A single status line, overwritten on each `print` call. Finish with `done`
/// to move the cursor to a new line.
///
/// By default the line is drawn on standard output, use `set_output` to pick
/// another destination. If the destination is not a terminal (for example the
/// program's output is redirected to a file) every call does nothing.
pub struct StatusLine<W: Terminal = Stdout> {
    default: fn() -> W,
    state: OnceLock<Bound<W>>,
}

/// Destination plus the cached result of the terminal check
struct Bound<W> {
    interactive: bool,
    out: Mutex<Output<W>>,
}

struct Output<W> {
    w: W,
    buf: Vec<u8>,
}

impl<W: Terminal> Bound<W> {
    fn detect(w: W) -> Self {
        let interactive = w.is_interactive();
        tracing::debug!(interactive, "status line destination bound");
        Self {
            interactive,
            out: Mutex::new(Output { w, buf: Vec::new() }),
        }
    }

    // the buffer is rebuilt on every write, so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, Output<W>> {
        self.out.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StatusLine<Stdout> {
    /// Creates a status line drawn on standard output. No I/O happens until first use.
    pub fn new() -> Self {
        Self::with_default(io::stdout)
    }
}

impl Default for StatusLine<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Terminal> StatusLine<W> {
    /// Creates a status line that opens `default` on first use unless `set_output` is called
    pub fn with_default(default: fn() -> W) -> Self {
        Self {
            default,
            state: OnceLock::new(),
        }
    }

    /// Overrides the default output and checks right away whether it is a terminal.
    ///
    /// # Panics
    ///
    /// Panics if any other method already ran, or if the output was already set.
    pub fn set_output(&self, out: W) {
        let mut bound = false;
        self.state.get_or_init(|| {
            bound = true;
            Bound::detect(out)
        });
        if !bound {
            panic!("StatusLine::set_output must be called before any other StatusLine methods");
        }
    }

    /// Reports whether updates reach a terminal, binding the default output if needed
    pub fn is_interactive(&self) -> bool {
        self.bound().interactive
    }

    /// Replaces the line with `text`. Because the line is expected to be
    /// rewritten in place, `text` must not contain newlines.
    ///
    /// The whole line goes out through one `write_all`, which is a single write
    /// call for any output that accepts the full buffer. Returns the number of
    /// bytes written, control prefix included, or `Ok(0)` when the output is
    /// not a terminal. If the bytes were written but the following flush
    /// fails, the flush error is returned instead of the count.
    pub fn print(&self, text: &str) -> io::Result<usize> {
        self.print_fmt(format_args!("{text}"))
    }

    /// Works like `print` with formatting, see the `status!` macro
    pub fn print_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<usize> {
        let bound = self.bound();
        if !bound.interactive {
            return Ok(0);
        }
        let mut guard = bound.lock();
        let out = &mut *guard;
        out.buf.clear();
        out.buf.extend_from_slice(ESC_PREFIX);
        out.buf.write_fmt(args)?;
        // a short write would leave part of the erase sequence on the line
        out.w.write_all(&out.buf)?;
        // stdout is line buffered and the status line never ends in a newline
        out.w.flush()?;
        Ok(out.buf.len())
    }

    /// Writes a single newline, leaving the last status visible above the cursor
    pub fn done(&self) -> io::Result<()> {
        let bound = self.bound();
        if !bound.interactive {
            return Ok(());
        }
        let mut out = bound.lock();
        out.w.write_all(b"\n")?;
        out.w.flush()
    }

    /// Hands back the output, or `None` if the line was never used
    pub fn into_inner(self) -> Option<W> {
        self.state.into_inner().map(|bound| {
            bound
                .out
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner)
                .w
        })
    }

    fn bound(&self) -> &Bound<W> {
        self.state.get_or_init(|| Bound::detect((self.default)()))
    }
}
