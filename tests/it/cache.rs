use arguments::{Arg, Arguments};

use crate::declare;

#[test]
fn repeated_queries_agree() {
    let args = declare(&["path REQUIRED", "--force FLAG"], "--force");
    let first = args.is_valid().unwrap_err().to_vec();
    assert_eq!(first, ["argument path is required"]);
    assert_eq!(args.is_valid().unwrap_err(), first.as_slice());
    assert_eq!(args.flag("--force").unwrap(), args.flag("--force").unwrap());
    assert!(std::ptr::eq(args.parsed(), args.parsed()));
}

#[test]
fn register_invalidates() {
    let mut args = Arguments::new().input(["prog", "file.txt"]);
    assert_eq!(args.is_valid().unwrap_err(), ["argument \"file.txt\" not expected nor accepted"]);

    args.register(Arg::positional("path")).unwrap();
    assert!(args.is_valid().is_ok());
    assert_eq!(args.value("path").unwrap(), Some("file.txt"));

    args.register(Arg::named("--out").required()).unwrap();
    assert_eq!(args.is_valid().unwrap_err(), ["argument --out is required"]);
}

#[test]
fn failed_register_keeps_declarations() {
    let mut args = Arguments::new().input(["prog", "-v"]).arg(Arg::character_flag("-v")).unwrap();
    assert!(args.flag("-v").unwrap());

    let err = args.register(Arg::character("-v")).unwrap_err();
    assert_eq!(err.to_string(), "arg id \"-v\" is already used");
    assert!(args.flag("-v").unwrap());
}

#[test]
fn set_input_invalidates() {
    let mut args = Arguments::new().input(["prog"]).arg(Arg::named("--name")).unwrap();
    assert_eq!(args.value("--name").unwrap(), None);

    args.set_input(["prog", "--name", "ferris"]);
    assert_eq!(args.value("--name").unwrap(), Some("ferris"));
}

#[test]
fn parse_leaves_stored_input_alone() {
    let args = Arguments::new().input(["prog", "a"]).arg(Arg::positional("x")).unwrap();
    let other = args.parse(&["prog", "b", "c"]);
    assert_eq!(other.errors(), ["argument \"c\" not expected nor accepted"]);
    assert_eq!(other.values()["x"].as_str(), Some("b"));
    assert_eq!(args.value("x").unwrap(), Some("a"));
}

#[test]
fn empty_input_skips_nothing() {
    let args = Arguments::new().arg(Arg::named_flag("--all")).unwrap();
    assert!(args.is_valid().is_ok());
    assert_eq!(args.program(), None);
    assert!(!args.flag("--all").unwrap());
}
