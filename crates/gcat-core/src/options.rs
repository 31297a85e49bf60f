// crates/gcat-core/src/options.rs
//
// Flag tokens -> canonical OptionSet.
// Composite letters (A, e, t) are expanded here, once; the transcoder only
// ever looks at the primitive toggles.

use crate::error::{CatError, Result};

/// Long spellings and the short letter each one stands for.
pub const LONG_FLAGS: &[(&str, char)] = &[
    ("--show-all", 'A'),
    ("--number-nonblank", 'b'),
    ("--show-ends", 'E'),
    ("--number", 'n'),
    ("--squeeze-blank", 's'),
    ("--show-tabs", 'T'),
    ("--show-nonprinting", 'v'),
];

/// Every short letter the resolver accepts.
pub const SHORT_FLAGS: &[char] = &['A', 'b', 'e', 'E', 'n', 's', 't', 'T', 'u', 'v'];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionSet {
    pub show_all: bool,
    pub number_nonblank: bool,
    pub show_ends: bool,
    pub number_all: bool,
    pub squeeze_blank: bool,
    pub show_tabs: bool,
    pub show_nonprinting: bool,
    /// -u: accepted for POSIX compatibility, no effect.
    pub unbuffered: bool,
}

impl OptionSet {
    /// Resolve flag tokens (`-bET`, `--number`, ...) into an option set.
    /// Fails on the first unknown letter or long name.
    pub fn resolve<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = OptionSet::default();
        for tok in tokens {
            let tok = tok.as_ref();
            for letter in letters_of(tok)? {
                opts.apply(letter);
            }
        }
        Ok(opts)
    }

    /// Apply one short letter already checked by `letters_of`. Idempotent.
    fn apply(&mut self, letter: char) {
        match letter {
            'A' => {
                self.show_all = true;
                self.show_nonprinting = true;
                self.show_ends = true;
                self.show_tabs = true;
            }
            'b' => self.number_nonblank = true,
            'e' => {
                self.show_nonprinting = true;
                self.show_ends = true;
            }
            'E' => self.show_ends = true,
            'n' => self.number_all = true,
            's' => self.squeeze_blank = true,
            't' => {
                self.show_nonprinting = true;
                self.show_tabs = true;
            }
            'T' => self.show_tabs = true,
            'u' => self.unbuffered = true,
            'v' => self.show_nonprinting = true,
            _ => {}
        }
    }

    #[inline]
    pub fn numbering(&self) -> bool {
        self.number_all || self.number_nonblank
    }
}

/// Letters named by a single token. Long names map through LONG_FLAGS;
/// a dash cluster is split per character.
fn letters_of(tok: &str) -> Result<Vec<char>> {
    if tok.starts_with("--") {
        return LONG_FLAGS
            .iter()
            .find(|(name, _)| *name == tok)
            .map(|&(_, letter)| vec![letter])
            .ok_or_else(|| CatError::UnrecognizedOption(tok.to_string()));
    }

    let mut out = Vec::with_capacity(tok.len());
    for c in tok.chars().skip_while(|&c| c == '-') {
        if !SHORT_FLAGS.contains(&c) {
            return Err(CatError::InvalidOption(c));
        }
        out.push(c);
    }
    Ok(out)
}
