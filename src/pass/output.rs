//! Password output layout.

use std::io::{self, Write};

use zeroize::Zeroize;

use super::Password;

/// Screen width assumed when none can be detected.
pub const SCREEN_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One password per line.
    Lines,
    /// All passwords on one line, space separated.
    SingleLine,
    /// As many passwords per row as fit in `width` columns.
    Columns { width: usize },
}

impl Layout {
    /// Passwords per output row.
    pub fn columns(&self, password_length: usize) -> usize {
        match *self {
            Layout::Lines => 1,
            Layout::SingleLine => usize::MAX,
            Layout::Columns { width } => (width / password_length.max(1)).max(1),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Columns {
            width: SCREEN_WIDTH,
        }
    }
}

/// Buffered writer that wipes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    const CAPACITY: usize = 8 * 1024;

    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(Self::CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > Self::CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= Self::CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
        let _ = self.inner.flush();
    }
}

/// Write `passwords` to `out` in the given layout.
///
/// Every row, including a final partial one, ends with a newline. Nothing is
/// written for an empty sequence. Returns the number of passwords written.
pub fn write_passwords<W, I>(
    out: W,
    passwords: I,
    layout: Layout,
    password_length: usize,
) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Password>,
{
    let mut out = SecureBufWriter::new(out);
    let columns = layout.columns(password_length);
    let mut written = 0;
    let mut in_row = 0;

    for password in passwords {
        if in_row > 0 {
            out.write_all(b" ")?;
        }
        out.write_all(password.as_bytes())?;
        written += 1;
        in_row += 1;
        if in_row == columns {
            out.write_all(b"\n")?;
            in_row = 0;
        }
    }

    if in_row > 0 {
        out.write_all(b"\n")?;
    }

    out.flush()?;
    Ok(written)
}
