use assert_cmd::Command;
use predicates::prelude::*;

fn hub() -> Command {
    let mut cmd = Command::cargo_bin("workstation-hub").unwrap();
    cmd.env_remove("WORKSTATION_HUB_COOKIE")
        .env("WORKSTATION_HUB_URL", "http://127.0.0.1:9")
        .env("WORKSTATION_HUB_DEBOUNCE_MS", "20")
        .env("RUST_LOG", "error");
    cmd
}

#[test]
fn test_cli_help() {
    hub()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Headless client for the Workstation Hub explore page"));
}

#[test]
fn test_cli_tab_help() {
    hub().args(["tab", "--help"]).assert().success().stdout(predicate::str::contains("pages"));
}

#[test]
fn test_filter_prints_navigation_target() {
    hub()
        .args(["filter", "--stage", "idea", "--collaboration", "mentors", "--stage", "mvp"])
        .args(["--location", "/explore/?search=kiln&page=3"])
        .assert()
        .success()
        .stdout("/explore/?stage=idea&stage=mvp&collaboration=mentors\n");
}

#[test]
fn test_search_navigates_once_for_full_query() {
    hub()
        .args(["search", "solar kiln", "--location", "/explore/?stage=idea"])
        .assert()
        .success()
        .stdout("/explore/?stage=idea&search=solar+kiln\n");
}

#[test]
fn test_short_search_prints_nothing() {
    hub().args(["search", "k"]).assert().success().stdout("");
}

#[test]
fn test_join_needs_no_backend() {
    hub().args(["join", "solar-kiln"]).assert().success().stdout("/projects/solar-kiln/\n");
}

#[test]
fn test_bookmark_without_csrf_cookie_asks_to_login() {
    hub()
        .args(["bookmark", "solar-kiln"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error] Please login to bookmark projects"));
}

#[test]
fn test_filter_rejects_unknown_stage() {
    hub()
        .args(["filter", "--stage", "launch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("possible values"));
}

#[test]
fn test_bookmark_toast_as_markup() {
    hub()
        .args(["--html", "bookmark", "solar-kiln"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            r#"<div class="toast error"><i class="fas fa-exclamation-circle"></i><span>Please login to bookmark projects</span></div>"#,
        ));
}
