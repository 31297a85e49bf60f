use gcat_core::{CatError, OptionSet};

#[test]
fn empty_token_list_sets_nothing() {
    let o = OptionSet::resolve(Vec::<&str>::new()).unwrap();
    assert_eq!(o, OptionSet::default());
    assert!(!o.numbering());
}

#[test]
fn cluster_is_split_per_letter() {
    let o = OptionSet::resolve(["-bET"]).unwrap();
    assert!(o.number_nonblank);
    assert!(o.show_ends);
    assert!(o.show_tabs);
    assert!(!o.show_nonprinting);
    assert!(!o.number_all);
}

#[test]
fn long_names_map_to_letters() {
    let long = OptionSet::resolve([
        "--number-nonblank",
        "--show-ends",
        "--number",
        "--squeeze-blank",
        "--show-tabs",
        "--show-nonprinting",
    ])
    .unwrap();
    let short = OptionSet::resolve(["-bEnsTv"]).unwrap();
    assert_eq!(long, short);

    assert_eq!(
        OptionSet::resolve(["--show-all"]).unwrap(),
        OptionSet::resolve(["-A"]).unwrap()
    );
}

#[test]
fn composites_expand() {
    let a = OptionSet::resolve(["-A"]).unwrap();
    assert!(a.show_all && a.show_nonprinting && a.show_ends && a.show_tabs);

    let e = OptionSet::resolve(["-e"]).unwrap();
    assert!(e.show_nonprinting && e.show_ends && !e.show_tabs);

    let t = OptionSet::resolve(["-t"]).unwrap();
    assert!(t.show_nonprinting && t.show_tabs && !t.show_ends);
}

#[test]
fn composite_expansion_ignores_order_and_repeats() {
    let a = OptionSet::resolve(["-A", "-v", "-A"]).unwrap();
    let b = OptionSet::resolve(["-vAA"]).unwrap();
    let c = OptionSet::resolve(["-A"]).unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn u_is_accepted_and_inert() {
    let o = OptionSet::resolve(["-u"]).unwrap();
    assert!(o.unbuffered);
    assert_eq!(
        o,
        OptionSet {
            unbuffered: true,
            ..OptionSet::default()
        }
    );
}

#[test]
fn unknown_letter_names_first_offender() {
    match OptionSet::resolve(["-n", "-bqz"]) {
        Err(CatError::InvalidOption(c)) => assert_eq!(c, 'q'),
        other => panic!("expected InvalidOption, got {other:?}"),
    }
}

#[test]
fn unknown_long_name_is_rejected() {
    match OptionSet::resolve(["--number", "--frobnicate"]) {
        Err(CatError::UnrecognizedOption(s)) => assert_eq!(s, "--frobnicate"),
        other => panic!("expected UnrecognizedOption, got {other:?}"),
    }
}

#[test]
fn option_errors_are_usage_errors() {
    assert!(CatError::InvalidOption('q').is_usage());
    assert!(CatError::UnrecognizedOption("--x".into()).is_usage());
    assert!(!CatError::PathNotFound("x".into()).is_usage());
}
