// crates/gcat-core/src/render.rs
//
// Pure byte -> display mapping. No state, no I/O.
//
// Notation (show-nonprinting):
//   32..=126  literal
//   127       ^?
//   < 32      ^ + (b + 64), except TAB (literal, or ^I with show-tabs)
//   >= 128    M- + rendering of (b - 128)

use crate::options::OptionSet;

/// A rendered byte: at most four output bytes (`M-^X`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    buf: [u8; 4],
    len: u8,
}

impl Fragment {
    const fn empty() -> Self {
        Self {
            buf: [0; 4],
            len: 0,
        }
    }

    fn push(&mut self, b: u8) {
        self.buf[self.len as usize] = b;
        self.len += 1;
    }

    fn one(b: u8) -> Self {
        let mut f = Self::empty();
        f.push(b);
        f
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

impl AsRef<[u8]> for Fragment {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Render one content byte (anything but LF) under `opts`.
pub fn render_byte(b: u8, opts: &OptionSet) -> Fragment {
    if b == b'\t' {
        return if opts.show_tabs {
            caret(b)
        } else {
            Fragment::one(b)
        };
    }
    if !opts.show_nonprinting {
        return Fragment::one(b);
    }

    let mut f = Fragment::empty();
    let low = if b >= 128 {
        f.push(b'M');
        f.push(b'-');
        b - 128
    } else {
        b
    };
    match low {
        32..=126 => f.push(low),
        127 => {
            f.push(b'^');
            f.push(b'?');
        }
        _ => {
            f.push(b'^');
            f.push(low + 64);
        }
    }
    f
}

/// Render the end of a line. `cr_pending` is set when a raw CR was held back
/// because it sits directly in front of this LF; that only happens under
/// show-ends (see `defers_cr`).
pub fn render_line_end(cr_pending: bool, opts: &OptionSet) -> &'static [u8] {
    if !opts.show_ends {
        return b"\n";
    }
    if cr_pending {
        b"^M$\n"
    } else {
        b"$\n"
    }
}

/// Whether a CR must be held back to see if an LF follows.
/// Only needed when show-ends is on and CR would otherwise print raw.
#[inline]
pub fn defers_cr(opts: &OptionSet) -> bool {
    opts.show_ends && !opts.show_nonprinting
}

fn caret(b: u8) -> Fragment {
    let mut f = Fragment::empty();
    f.push(b'^');
    f.push(b + 64);
    f
}
