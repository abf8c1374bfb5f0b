//! Valgrind-style memory trace parsing and reading.
//!
//! This module turns trace text into access records. It provides:
//! 1. **Line parsing:** One record per line, `[space]K addr[,size]` with a
//!    hexadecimal address and kind `I`, `L`, `S`, or `M`.
//! 2. **Filtered reading:** An iterator over any buffered source that yields
//!    only forwarded records, skipping instruction fetches and malformed
//!    lines by design rather than by error.

use std::io::BufRead;

use tracing::{debug, trace};

/// Kind of memory access recorded in a trace line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    /// Instruction fetch (`I`); never forwarded to the cache model.
    Instruction,
    /// Data load (`L`); one sub-access.
    Load,
    /// Data store (`S`); one sub-access.
    Store,
    /// Data modify (`M`); a load followed by a store to the same address.
    Modify,
}

impl AccessKind {
    /// Maps a trace operation character to its access kind.
    const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Self::Instruction),
            'L' => Some(Self::Load),
            'S' => Some(Self::Store),
            'M' => Some(Self::Modify),
            _ => None,
        }
    }
}

/// One parsed trace record: the operation kind and the accessed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRecord {
    /// Operation kind from the trace line.
    pub kind: AccessKind,
    /// Accessed address (the size suffix on the line is ignored).
    pub addr: u64,
}

/// Parses a single trace line into a record.
///
/// Accepts an optional leading space before the kind character, then
/// whitespace, then a hexadecimal address; anything from a `,` onward (the
/// access size) is ignored. Returns `None` for lines that are not a
/// recognized access record.
///
/// # Arguments
///
/// * `line` - One line of trace text, without the trailing newline.
pub fn parse_line(line: &str) -> Option<AccessRecord> {
    let mut chars = line.trim_start().chars();
    let kind = AccessKind::from_char(chars.next()?)?;

    let rest = chars.as_str().trim_start();
    let hex = rest.split(',').next()?.trim();
    let addr = u64::from_str_radix(hex, 16).ok()?;

    Some(AccessRecord { kind, addr })
}

/// Iterator over the forwarded records of a buffered trace source.
///
/// Instruction fetches and unparseable lines are skipped, including lines
/// that are not valid UTF-8 (they are decoded lossily and fail to parse
/// like any other malformed line). I/O errors from the underlying reader
/// terminate the iteration as errors.
#[derive(Debug)]
pub struct TraceReader<R> {
    source: R,
    buf: Vec<u8>,
    line_no: u64,
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps a buffered source in a filtering trace reader.
    pub const fn new(source: R) -> Self {
        Self {
            source,
            buf: Vec::new(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = std::io::Result<AccessRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.source.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
            self.line_no += 1;

            match parse_line(&String::from_utf8_lossy(&self.buf)) {
                Some(record) if record.kind != AccessKind::Instruction => {
                    trace!(line = self.line_no, ?record, "forwarding trace record");
                    return Some(Ok(record));
                }
                Some(_) => {}
                None => {
                    debug!(line = self.line_no, "skipping unrecognized trace line");
                }
            }
        }
    }
}
