use std::process::{Command, Output};

fn demo(s: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_progopts-example"))
        .args(s.split(' ').skip(1))
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}
fn stderr(out: &Output) -> String {
    String::from_utf8(out.stderr.clone()).unwrap()
}

#[test]
fn test_no_arguments_prints_usage() {
    let out = demo("demo");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "");
    let err = stderr(&out);
    assert!(err.starts_with("Usage: demo [subprog] [option]\n\n"), "{err}");
    assert!(err.contains("Available subprograms:\n\tgreet\tsay hello\n"), "{err}");

    let out = demo("demo greet");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "");
    assert!(stderr(&out).starts_with("Usage: demo greet [option]\n\n"));
}

#[test]
fn test_option_error() {
    let out = demo("demo greet -l");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "");
    assert_eq!(
        stderr(&out),
        "[option error] Option '-n', 'name' (and its arguments) must be given.\n"
    );

    let out = demo("demo sum -v 1 x");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        stderr(&out),
        "[option error] Argument 'x' of option '-v', 'values' is not a valid number.\n"
    );
}

#[test]
fn test_subprogram_error() {
    let out = demo("demo nope");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "");
    assert_eq!(stderr(&out), "[subprogram error] Invalid subprogram 'nope'.\n");
}

#[test]
fn test_success() {
    let out = demo("demo greet -n Ann -t 2");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Hello, Ann!\nHello, Ann!\n");
    assert_eq!(stderr(&out), "");

    let out = demo("demo sum -v 1 2.5 -p 1");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2 value(s), total 3.5\n");

    let out = demo("demo fetch -u a b -o dir");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "a -> dir\nb -> dir\n");
}
