use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["neudev", "--base-url", "http://localhost:8000/api"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn defaults_apply_without_flags() {
    let cli = parse(&["logout"]);
    assert_eq!(cli.session_file, PathBuf::from(".neudev-session.json"));
    assert_eq!(cli.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert!(matches!(cli.command, Command::Logout));
}

#[test]
fn student_registration_takes_extra_fields() {
    let cli = parse(&[
        "register", "student", "--firstname", "Lin", "--lastname", "Chen", "--email", "lin@neu.edu.ph",
        "--password", "password1", "--student-num", "21-0001", "--program", "BSCS",
    ]);
    let Command::Register(RegisterCommand { command: RegisterSubcommand::Student { signup, student_num, program } }) =
        cli.command
    else {
        panic!("expected student registration");
    };
    assert_eq!(signup.email, "lin@neu.edu.ph");
    assert_eq!(signup.confirm_password, None);
    assert_eq!((student_num.as_str(), program.as_str()), ("21-0001", "BSCS"));
}

#[test]
fn activity_view_role_parses_from_as_flag() {
    let cli = parse(&["activity", "leaderboard", "3", "--as", "teacher"]);
    let Command::Activity(ActivityCommand { command: ActivitySubcommand::Leaderboard { act_id, role } }) = cli.command
    else {
        panic!("expected leaderboard");
    };
    assert_eq!(act_id, 3);
    assert_eq!(role, Some(Role::Teacher));
}

#[test]
fn item_list_parses_scope() {
    let cli = parse(&["item", "list", "2", "--scope", "personal", "--teacher-id", "7"]);
    let Command::Item(ItemCommand { command: ItemSubcommand::List { item_type_id, scope, teacher_id } }) = cli.command
    else {
        panic!("expected item list");
    };
    assert_eq!(item_type_id, 2);
    assert_eq!(scope, Some(ItemScope::Personal));
    assert_eq!(teacher_id, Some(7));
}

#[test]
fn unknown_role_is_rejected() {
    let argv = ["neudev", "--base-url", "http://x", "activity", "items", "1", "--as", "admin"];
    assert!(Cli::try_parse_from(argv).is_err());
}

#[test]
fn class_kick_takes_two_ids() {
    let cli = parse(&["class", "kick", "5", "21"]);
    assert!(matches!(
        cli.command,
        Command::Class(ClassCommand { command: ClassSubcommand::Kick { class_id: 5, student_id: 21 } })
    ));
}
