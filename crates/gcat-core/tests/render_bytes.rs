use gcat_core::options::OptionSet;
use gcat_core::render::{defers_cr, render_byte, render_line_end};

fn opts(flags: &str) -> OptionSet {
    OptionSet::resolve([flags]).unwrap()
}

fn r(b: u8, o: &OptionSet) -> Vec<u8> {
    render_byte(b, o).as_bytes().to_vec()
}

#[test]
fn plain_bytes_pass_through_without_v() {
    let o = OptionSet::default();
    for b in [b'a', 0x01, 0x7F, 0x80, 0xFF, b'\t', b'\r'] {
        assert_eq!(r(b, &o), vec![b]);
    }
}

#[test]
fn tab_follows_show_tabs_only() {
    assert_eq!(r(b'\t', &opts("-T")), b"^I");
    assert_eq!(r(b'\t', &opts("-v")), b"\t");
    assert_eq!(r(b'\t', &opts("-t")), b"^I");
}

#[test]
fn caret_notation_for_controls() {
    let v = opts("-v");
    assert_eq!(r(0x00, &v), b"^@");
    assert_eq!(r(0x01, &v), b"^A");
    assert_eq!(r(b'\r', &v), b"^M");
    assert_eq!(r(0x1B, &v), b"^[");
    assert_eq!(r(0x1F, &v), b"^_");
    assert_eq!(r(0x7F, &v), b"^?");
}

#[test]
fn printable_ascii_is_literal_under_v() {
    let v = opts("-v");
    for b in 32u8..=126 {
        assert_eq!(r(b, &v), vec![b]);
    }
}

#[test]
fn high_bit_uses_meta_prefix() {
    let v = opts("-v");
    assert_eq!(r(0x80, &v), b"M-^@");
    assert_eq!(r(0x89, &v), b"M-^I");
    assert_eq!(r(0xA0, &v), b"M- ");
    assert_eq!(r(0xC1, &v), b"M-A");
    assert_eq!(r(0xFE, &v), b"M-~");
    assert_eq!(r(0xFF, &v), b"M-^?");
}

#[test]
fn line_ends() {
    assert_eq!(render_line_end(false, &OptionSet::default()), b"\n");
    assert_eq!(render_line_end(false, &opts("-E")), b"$\n");
    assert_eq!(render_line_end(true, &opts("-E")), b"^M$\n");
}

#[test]
fn line_end_without_show_ends_is_bare_lf() {
    let o = opts("-v");
    assert!(!defers_cr(&o));
    assert_eq!(render_line_end(false, &o), b"\n");
}

#[test]
fn cr_is_deferred_only_for_bare_show_ends() {
    assert!(defers_cr(&opts("-E")));
    assert!(!defers_cr(&opts("-e")));
    assert!(!defers_cr(&opts("-A")));
    assert!(!defers_cr(&OptionSet::default()));
}
