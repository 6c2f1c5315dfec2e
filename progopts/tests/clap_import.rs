#![cfg(feature = "clap")]

use clap::{Arg, ArgAction, Command};
use progopts::import::from_clap;
use progopts::*;

fn args(s: &str) -> Vec<String> {
    let _ = env_logger::try_init();
    s.split(' ').map(str::to_owned).collect()
}

fn command() -> Command {
    Command::new("fetcher")
        .about("downloads things")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue),
        )
        .arg(Arg::new("config").long("config"))
        .subcommand(
            Command::new("get")
                .about("get urls")
                .arg(
                    Arg::new("url")
                        .short('u')
                        .long("url")
                        .help("where from")
                        .required(true)
                        .num_args(1..),
                )
                .arg(Arg::new("out").short('o').long("out"))
                .arg(Arg::new("target")),
        )
}

fn get_strings(prog: &Program, short: char) -> Vec<String> {
    match prog.option(short).unwrap().binding() {
        Binding::Strs(slot) => slot.get(),
        other => panic!("unexpected binding {other:?}"),
    }
}

#[test]
fn test_import_tree() {
    let prog = from_clap(&mut command()).unwrap();
    assert_eq!(prog.name(), "fetcher");
    assert_eq!(prog.description(), "downloads things");

    let verbose = prog.option('v').unwrap();
    assert_eq!(verbose.long(), "verbose");
    assert_eq!(verbose.value_type(), ValueType::Bool);
    assert!(!verbose.accepts_arg());
    assert!(prog.option('h').unwrap().is_standalone());
    assert!(
        prog.options().iter().all(|o| o.long() != "config"),
        "long-only arguments can't be parsed"
    );

    let get = prog.child("get").unwrap();
    assert_eq!(get.description(), "get urls");
    assert_eq!(get.parent_name(), Some("fetcher"));
    let url = get.option('u').unwrap();
    assert_eq!(url.description(), "where from");
    assert!(url.is_necessary());
    assert!(url.requires_arg());
    assert!(url.accepts_multiple());
    assert!(!get.option('o').unwrap().accepts_multiple());
    assert!(get.options().iter().all(|o| o.long() != "target"));
}

#[test]
fn test_import_parse() {
    let prog = from_clap(&mut command()).unwrap();
    prog.parse_and_run(&args("fetcher get -u a b -o x")).unwrap();

    let get = prog.child("get").unwrap();
    assert_eq!(get_strings(get, 'u'), vec!["a", "b"]);
    match get.option('o').unwrap().binding() {
        Binding::Str(slot) => assert_eq!(slot.get(), "x"),
        other => panic!("unexpected binding {other:?}"),
    }

    assert_eq!(
        prog.parse_and_run(&args("fetcher get -o x")).unwrap_err(),
        Error::MissingRequiredOption(vec![OptionLabel::new('u', "url")])
    );
    prog.parse_and_run(&args("fetcher get -h")).unwrap();
}
