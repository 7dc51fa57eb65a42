//! Unit-тесты для парсера командной строки.

use super::super::builtins::Builtin;
use super::super::parser::{
    LineCommand, ParseError, parse_group, parse_line, split_groups, tokenize,
};

#[test]
fn line_without_separator_is_single_group() {
    assert_eq!(split_groups("ls -la /tmp", '&'), vec!["ls -la /tmp"]);
}

#[test]
fn separator_splits_and_is_dropped() {
    assert_eq!(split_groups("ls & pwd", '&'), vec!["ls ", " pwd"]);
}

#[test]
fn empty_groups_are_preserved() {
    assert_eq!(split_groups("&ls&&pwd&", '&'), vec!["", "ls", "", "pwd", ""]);
}

#[test]
fn separator_inside_token_still_splits() {
    assert_eq!(split_groups("echo a&b", '&'), vec!["echo a", "b"]);
}

#[test]
fn tokenizes_basic_words() {
    assert_eq!(tokenize("echo hello world"), vec!["echo", "hello", "world"]);
}

#[test]
fn collapses_runs_of_spaces_and_tabs() {
    assert_eq!(tokenize("  echo \t a\t\tb  "), vec!["echo", "a", "b"]);
}

#[test]
fn blank_group_has_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   ").is_empty());
    assert!(tokenize("\t \t").is_empty());
}

#[test]
fn quotes_are_not_special() {
    assert_eq!(tokenize("echo \"a b\""), vec!["echo", "\"a", "b\""]);
}

#[test]
fn exit_is_matched_exactly() {
    assert_eq!(parse_line("exit"), LineCommand::Exit);
    assert_eq!(parse_line("exit & ls"), LineCommand::Groups(vec!["exit ", " ls"]));
    assert_eq!(parse_line(" exit"), LineCommand::Groups(vec![" exit"]));
    assert_eq!(parse_line("exit 1"), LineCommand::Groups(vec!["exit 1"]));
}

#[test]
fn cd_is_recognized_on_whole_line() {
    assert_eq!(
        parse_line("cd /tmp"),
        LineCommand::Builtin(Builtin::Cd, vec!["/tmp".to_string()])
    );
}

#[test]
fn cd_takes_every_remaining_token_of_the_line() {
    assert_eq!(
        parse_line("cd /tmp & ls"),
        LineCommand::Builtin(
            Builtin::Cd,
            vec!["/tmp".to_string(), "&".to_string(), "ls".to_string()]
        )
    );
}

#[test]
fn cd_is_not_a_builtin_later_in_the_line() {
    assert_eq!(
        parse_line("ls & cd /tmp"),
        LineCommand::Groups(vec!["ls ", " cd /tmp"])
    );
}

#[test]
fn parses_plain_command() {
    let cmd = parse_group(" ls -l  /tmp ").unwrap().unwrap();
    assert_eq!(cmd.name, "ls");
    assert_eq!(cmd.args, vec!["-l", "/tmp"]);
    assert_eq!(cmd.redirect, None);
}

#[test]
fn blank_group_parses_to_nothing() {
    assert_eq!(parse_group("  \t ").unwrap(), None);
}

#[test]
fn redirect_is_extracted_and_removed_from_args() {
    let cmd = parse_group("ls -l > out.txt").unwrap().unwrap();
    assert_eq!(cmd.name, "ls");
    assert_eq!(cmd.args, vec!["-l"]);
    assert_eq!(cmd.redirect.as_deref(), Some("out.txt"));
}

#[test]
fn tokens_after_redirect_target_are_dropped() {
    let cmd = parse_group("echo a > out.txt b c").unwrap().unwrap();
    assert_eq!(cmd.args, vec!["a"]);
    assert_eq!(cmd.redirect.as_deref(), Some("out.txt"));
}

#[test]
fn only_first_marker_counts() {
    let cmd = parse_group("echo a > one > two").unwrap().unwrap();
    assert_eq!(cmd.args, vec!["a"]);
    assert_eq!(cmd.redirect.as_deref(), Some("one"));
}

#[test]
fn marker_glued_to_word_is_an_ordinary_token() {
    let cmd = parse_group("echo a>out").unwrap().unwrap();
    assert_eq!(cmd.args, vec!["a>out"]);
    assert_eq!(cmd.redirect, None);
}

#[test]
fn redirect_without_program_keeps_target() {
    let cmd = parse_group("> out.txt").unwrap().unwrap();
    assert_eq!(cmd.name, "");
    assert!(cmd.args.is_empty());
    assert_eq!(cmd.redirect.as_deref(), Some("out.txt"));
}

#[test]
fn errors_on_missing_redirect_target() {
    let err = parse_group("ls -l >").unwrap_err();
    assert_eq!(err, ParseError::MissingRedirectTarget);
}
