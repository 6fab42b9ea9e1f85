use assert_cmd::Command;

#[allow(deprecated)]
fn run_help(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("acadex").unwrap();
    let output = cmd.args(args).arg("--help").output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_main_help() {
    let help = run_help(&[]);
    insta::assert_snapshot!("main_help", help);
}

#[test]
fn test_init_help() {
    let help = run_help(&["init"]);
    insta::assert_snapshot!("init_help", help);
}

#[test]
fn test_login_help() {
    let help = run_help(&["login"]);
    insta::assert_snapshot!("login_help", help);
}

#[test]
fn test_promote_help() {
    let help = run_help(&["promote"]);
    insta::assert_snapshot!("promote_help", help);
}

#[test]
fn test_user_help() {
    let help = run_help(&["user"]);
    insta::assert_snapshot!("user_help", help);
}

#[test]
fn test_catalog_help() {
    let help = run_help(&["catalog"]);
    insta::assert_snapshot!("catalog_help", help);
}

#[test]
fn test_catalog_resolve_help() {
    let help = run_help(&["catalog", "resolve"]);
    insta::assert_snapshot!("catalog_resolve_help", help);
}

#[test]
fn test_quiz_help() {
    let help = run_help(&["quiz"]);
    insta::assert_snapshot!("quiz_help", help);
}

#[test]
fn test_quiz_import_help() {
    let help = run_help(&["quiz", "import"]);
    insta::assert_snapshot!("quiz_import_help", help);
}

#[test]
fn test_tutorial_help() {
    let help = run_help(&["tutorial"]);
    insta::assert_snapshot!("tutorial_help", help);
}
