// crates/gcat-core/src/transcode.rs
//
// Stream transcoder: applies an OptionSet to one source's bytes.
// State (line number, blank run, previous byte) lives in TranscodeState and
// is threaded by the caller across every source of one run.

use crate::options::OptionSet;
use crate::render::{defers_cr, render_byte, render_line_end};

/// Width of the right-justified line number field.
pub const LINE_NUMBER_WIDTH: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscodeState {
    /// Next line number to print.
    pub line_number: u64,
    /// Newlines seen since the last content byte. 0 = mid-line,
    /// 1 = at line start, n >= 2 = n - 1 blank lines just passed.
    pub consecutive_newline_count: u32,
    pub previous_byte: Option<u8>,
}

impl TranscodeState {
    pub fn new() -> Self {
        Self {
            line_number: 1,
            consecutive_newline_count: 1,
            previous_byte: None,
        }
    }

    #[inline]
    fn at_line_start(&self) -> bool {
        self.consecutive_newline_count > 0
    }
}

impl Default for TranscodeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-source counters, reported by the driver.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TranscodeStats {
    pub bytes_in: usize,
    pub bytes_out: usize,
    pub lines_numbered: u64,
    pub lines_squeezed: u64,
}

/// Transcode one source, appending rendered bytes to `out`.
///
/// A final LF is the source's terminator and is rendered like any other line
/// end. A non-empty source without one gets a bare LF appended so every
/// source leaves the output at a line boundary. Empty input emits nothing.
pub fn transcode(
    input: &[u8],
    opts: &OptionSet,
    state: &mut TranscodeState,
    out: &mut Vec<u8>,
) -> TranscodeStats {
    let start = out.len();
    let mut stats = TranscodeStats {
        bytes_in: input.len(),
        ..TranscodeStats::default()
    };
    let defer = defers_cr(opts);

    for &b in input {
        let cr_pending = defer && state.previous_byte == Some(b'\r');

        if b == b'\n' {
            if state.at_line_start() {
                // Blank line.
                if opts.squeeze_blank && state.consecutive_newline_count >= 2 {
                    stats.lines_squeezed += 1;
                    state.previous_byte = Some(b);
                    continue;
                }
                if opts.number_all && !opts.number_nonblank {
                    emit_line_number(state, out);
                    stats.lines_numbered += 1;
                }
            }
            out.extend_from_slice(render_line_end(cr_pending, opts));
            state.consecutive_newline_count = state.consecutive_newline_count.saturating_add(1);
        } else {
            if state.at_line_start() && opts.numbering() {
                emit_line_number(state, out);
                stats.lines_numbered += 1;
            }
            if cr_pending {
                out.push(b'\r');
            }
            if !(defer && b == b'\r') {
                out.extend_from_slice(render_byte(b, opts).as_bytes());
            }
            state.consecutive_newline_count = 0;
        }

        state.previous_byte = Some(b);
    }

    if let Some(&last) = input.last() {
        if last != b'\n' {
            if defer && last == b'\r' {
                out.push(b'\r');
            }
            out.push(b'\n');
            state.consecutive_newline_count = 1;
            state.previous_byte = Some(b'\n');
        }
    }

    stats.bytes_out = out.len() - start;
    stats
}

fn emit_line_number(state: &mut TranscodeState, out: &mut Vec<u8>) {
    let field = format!("{:>width$} ", state.line_number, width = LINE_NUMBER_WIDTH);
    out.extend_from_slice(field.as_bytes());
    state.line_number += 1;
}
