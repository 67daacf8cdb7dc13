#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn delegate(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("delegate").unwrap();
    cmd.current_dir(dir.path()).env("DELEGATE_ROOT", dir.path());
    cmd
}

const GRAPH: &str = r#"stakeholders:
  - name: FIRST_LAST_1
    alias: ["Alex E.", "alex", "ae"]
    role: Senior Engineer
    relationship: direct_report
    domains: ["infrastructure", "CI/CD", "incident response", "observability"]
    capacity_signal: medium
  - name: FIRST_LAST_4
    alias: ["Riley L.", "riley"]
    role: Staff Engineer
    relationship: direct_report
    domains: ["backend", "API design", "infrastructure"]
    capacity_signal: low
  - name: VENDOR_1
    alias: "Vendor A"
    role: Account Manager
    relationship: vendor
    domains: ["contracts", "procurement", "licensing"]
    capacity_signal: high
"#;

fn write_graph(dir: &TempDir, body: &str) {
    let config = dir.path().join("integrations/config");
    std::fs::create_dir_all(&config).unwrap();
    std::fs::write(config.join("stakeholders.yaml"), body).unwrap();
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.output().unwrap();
    serde_json::from_slice(&out.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// delegate init
// ---------------------------------------------------------------------------

#[test]
fn init_writes_example_and_gitignore() {
    let dir = TempDir::new().unwrap();
    delegate(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("stakeholders.yaml.example"));

    let example = dir
        .path()
        .join("integrations/config/stakeholders.yaml.example");
    assert!(example.exists());
    let gitignore = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
    assert!(gitignore.contains("integrations/config/stakeholders.yaml"));
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    delegate(&dir).arg("init").assert().success();
    delegate(&dir).arg("init").assert().success();

    let gitignore = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
    assert_eq!(
        gitignore
            .lines()
            .filter(|l| *l == "integrations/config/stakeholders.yaml")
            .count(),
        1
    );
}

#[test]
fn example_graph_is_usable() {
    let dir = TempDir::new().unwrap();
    delegate(&dir).arg("init").assert().success();
    let example = dir
        .path()
        .join("integrations/config/stakeholders.yaml.example");

    let v = json_output(delegate(&dir).args([
        "--json",
        "match",
        "Update infrastructure alerting thresholds",
        "--graph",
        example.to_str().unwrap(),
    ]));
    assert_eq!(v["status"], "match");
    assert_eq!(v["candidates"][0]["alias"], "Alex E.");
}

// ---------------------------------------------------------------------------
// delegate match
// ---------------------------------------------------------------------------

#[test]
fn match_without_graph_reports_no_graph() {
    let dir = TempDir::new().unwrap();
    let v = json_output(delegate(&dir).args(["--json", "match", "Anything"]));
    assert_eq!(v["status"], "no_graph");
    assert_eq!(v["candidates"].as_array().unwrap().len(), 0);
}

#[test]
fn match_empty_graph() {
    let dir = TempDir::new().unwrap();
    write_graph(&dir, "stakeholders: []\n");
    let v = json_output(delegate(&dir).args(["--json", "match", "Anything"]));
    assert_eq!(v["status"], "empty_graph");
}

#[test]
fn match_surfaces_runner_up() {
    let dir = TempDir::new().unwrap();
    write_graph(&dir, GRAPH);
    let v = json_output(delegate(&dir).args(["--json", "match", "infrastructure migration"]));
    assert_eq!(v["status"], "match");
    let candidates = v["candidates"].as_array().unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0]["alias"], "Alex E.");
    assert_eq!(candidates[0]["score"], 6);
    assert_eq!(candidates[1]["alias"], "Riley L.");
    assert_eq!(candidates[1]["capacity_warning"], true);
}

#[test]
fn match_output_never_contains_full_name() {
    let dir = TempDir::new().unwrap();
    write_graph(&dir, GRAPH);
    delegate(&dir)
        .args(["--json", "match", "infrastructure", "contracts procurement"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FIRST_LAST").not())
        .stdout(predicate::str::contains("VENDOR_1").not());
}

#[test]
fn match_text_output() {
    let dir = TempDir::new().unwrap();
    write_graph(&dir, GRAPH);
    delegate(&dir)
        .args(["match", "Update infrastructure alerting thresholds"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Suggested delegate: Alex E. (Senior Engineer)",
        ));
}

#[test]
fn match_blocked_by_authority_flag() {
    let dir = TempDir::new().unwrap();
    write_graph(&dir, GRAPH);
    delegate(&dir)
        .args([
            "--json",
            "match",
            "Approve infrastructure contract",
            "This requires your sign-off",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"blocked\""))
        .stderr(predicate::str::contains("requires your sign-off"));
}

#[test]
fn match_authority_check_can_be_skipped() {
    let dir = TempDir::new().unwrap();
    write_graph(&dir, GRAPH);
    let v = json_output(delegate(&dir).args([
        "--json",
        "match",
        "Executive decision on infrastructure",
        "--skip-authority-check",
    ]));
    assert_eq!(v["status"], "match");
}

#[test]
fn match_tolerates_unrecognized_relationship() {
    let dir = TempDir::new().unwrap();
    let graph = format!(
        "{GRAPH}  - name: CONTRACTOR_1\n    alias: \"Sam C.\"\n    role: Contractor\n    \
         relationship: contractor\n    domains: [\"backend\"]\n"
    );
    write_graph(&dir, &graph);
    let v = json_output(delegate(&dir).args(["--json", "match", "infrastructure migration"]));
    assert_eq!(v["status"], "match");
    let aliases: Vec<&str> = v["candidates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["alias"].as_str().unwrap())
        .collect();
    assert_eq!(aliases, ["Alex E.", "Riley L."]);
}

#[test]
fn match_malformed_graph_fails() {
    let dir = TempDir::new().unwrap();
    write_graph(&dir, "stakeholders:\n  - name: X\n    alias: []\n");
    delegate(&dir)
        .args(["match", "Anything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load stakeholder graph"));
}

// ---------------------------------------------------------------------------
// delegate resolve / stakeholders
// ---------------------------------------------------------------------------

#[test]
fn resolve_lookup_term() {
    let dir = TempDir::new().unwrap();
    write_graph(&dir, GRAPH);
    delegate(&dir)
        .args(["resolve", "  AE "])
        .assert()
        .success()
        .stdout("Alex E.\n");
    delegate(&dir)
        .args(["resolve", "vendor a"])
        .assert()
        .success()
        .stdout("Vendor A\n");
}

#[test]
fn resolve_unknown_fails_with_null_alias() {
    let dir = TempDir::new().unwrap();
    write_graph(&dir, GRAPH);
    let out = delegate(&dir)
        .args(["--json", "resolve", "unknown person"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert!(v["alias"].is_null());
}

#[test]
fn stakeholders_table_hides_names() {
    let dir = TempDir::new().unwrap();
    write_graph(&dir, GRAPH);
    delegate(&dir)
        .arg("stakeholders")
        .assert()
        .success()
        .stdout(predicate::str::contains("Riley L."))
        .stdout(predicate::str::contains("direct_report"))
        .stdout(predicate::str::contains("FIRST_LAST").not());
}

// ---------------------------------------------------------------------------
// delegate authority / checkin / elapsed / state
// ---------------------------------------------------------------------------

#[test]
fn authority_reports_phrases() {
    let dir = TempDir::new().unwrap();
    let v = json_output(delegate(&dir).args([
        "--json",
        "authority",
        "Review team staffing plan",
        "This involves a personnel decision",
    ]));
    assert_eq!(v["flagged"], true);
    assert_eq!(v["phrases"][0], "personnel decision");
}

#[test]
fn checkin_from_friday() {
    let dir = TempDir::new().unwrap();
    delegate(&dir)
        .args(["checkin", "--days", "1", "--from", "2026-02-20"])
        .assert()
        .success()
        .stdout("2026-02-23\n");
    delegate(&dir)
        .args(["checkin", "--from", "2026-02-20"])
        .assert()
        .success()
        .stdout("2026-02-24\n");
}

#[test]
fn checkin_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    delegate(&dir)
        .args(["checkin", "--from", "Feb 20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn elapsed_business_days() {
    let dir = TempDir::new().unwrap();
    delegate(&dir)
        .args(["elapsed", "2026-02-16", "2026-02-24"])
        .assert()
        .success()
        .stdout("6\n");
    delegate(&dir)
        .args(["elapsed", "2026-02-24", "2026-02-16"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn state_precedence_from_fields() {
    let dir = TempDir::new().unwrap();
    delegate(&dir)
        .args([
            "state",
            "--field",
            "Delegate to=Alex E.",
            "--field",
            "Synced=Reminders — 2026-02-21",
        ])
        .assert()
        .success()
        .stdout("synced\n");
    delegate(&dir)
        .args(["state", "-f", "Suggested delegate=Jordan F."])
        .assert()
        .success()
        .stdout("suggested\n");
    delegate(&dir).arg("state").assert().success().stdout("none\n");
}

#[test]
fn state_from_file_with_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("task.yaml");
    std::fs::write(
        &path,
        "Title: Some task\n\"Delegate to\": \"[not yet assigned — see stakeholders.yaml]\"\n",
    )
    .unwrap();
    delegate(&dir)
        .args(["state", "--file", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("unassigned\n");
    delegate(&dir)
        .args([
            "state",
            "--file",
            path.to_str().unwrap(),
            "--field",
            "Delegate to=Alex E.",
        ])
        .assert()
        .success()
        .stdout("confirmed\n");
}

#[test]
fn state_rejects_malformed_field() {
    let dir = TempDir::new().unwrap();
    delegate(&dir)
        .args(["state", "--field", "Synced"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// delegate record / follow-up
// ---------------------------------------------------------------------------

#[test]
fn record_resolves_alias_and_dates() {
    let dir = TempDir::new().unwrap();
    write_graph(&dir, GRAPH);
    let v = json_output(delegate(&dir).args([
        "--json",
        "record",
        "Review infrastructure alerting thresholds",
        "--delegate",
        "alex",
        "--today",
        "2026-02-20",
    ]));
    assert_eq!(v["Delegate to"], "Alex E.");
    assert_eq!(v["Scheduled"], "2026-02-20");
    assert_eq!(v["Check-in date"], "2026-02-24");
    assert_eq!(v["Action"], "Delegated — check in 2026-02-24");
    assert_eq!(v["Quadrant"], "Q3 — Delegate if possible");
}

fn field_order(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter_map(|l| l.split_once(':').map(|(k, _)| k.trim().trim_matches('"').to_string()))
        .collect()
}

#[test]
fn record_prints_fields_in_task_list_order() {
    let dir = TempDir::new().unwrap();
    write_graph(&dir, GRAPH);
    let out = delegate(&dir)
        .args(["record", "Review thresholds", "--delegate", "Alex E.", "--today", "2026-02-20"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(
        field_order(&out.stdout),
        [
            "Title",
            "Description",
            "Source",
            "Requester",
            "Urgency",
            "Quadrant",
            "Delegate to",
            "Check-in date",
            "Scheduled",
            "Action",
        ]
    );
}

#[test]
fn follow_up_json_keeps_field_order() {
    let dir = TempDir::new().unwrap();
    let out = delegate(&dir)
        .args([
            "--json",
            "follow-up",
            "Review alerting thresholds",
            "--delegate",
            "Alex E.",
            "--checkin",
            "2026-02-20",
            "--today",
            "2026-02-23",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(
        field_order(&out.stdout),
        ["Title", "Description", "Source", "Requester", "Urgency", "Due date", "Status"]
    );
}

#[test]
fn record_unknown_delegate_fails() {
    let dir = TempDir::new().unwrap();
    write_graph(&dir, GRAPH);
    delegate(&dir)
        .args(["record", "Task", "--delegate", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no stakeholder matches"));
}

#[test]
fn follow_up_record_fields() {
    let dir = TempDir::new().unwrap();
    let v = json_output(delegate(&dir).args([
        "--json",
        "follow-up",
        "Review alerting thresholds",
        "--delegate",
        "Alex E.",
        "--checkin",
        "2026-02-20",
        "--today",
        "2026-02-23",
    ]));
    assert_eq!(v["Title"], "Follow up: Review alerting thresholds with Alex E.");
    assert_eq!(v["Urgency"], "Check-in overdue");
    assert_eq!(v["Status"], "Unprocessed");
}

// ---------------------------------------------------------------------------
// delegate stale / overdue
// ---------------------------------------------------------------------------

#[test]
fn stale_flags_overloaded_delegate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("delegations.yaml");
    std::fs::write(
        &path,
        "- alias: Alex E.\n  task_title: Task A\n  scheduled_date: 2026-02-12\n\
         - alias: Alex E.\n  task_title: Task B\n  scheduled_date: 2026-02-13\n\
         - alias: Jordan F.\n  task_title: Task C\n  scheduled_date: 2026-02-02\n",
    )
    .unwrap();
    let v = json_output(delegate(&dir).args([
        "--json",
        "stale",
        "--file",
        path.to_str().unwrap(),
        "--today",
        "2026-02-23",
    ]));
    let stale = v["stale"].as_array().unwrap();
    assert_eq!(stale.len(), 1);
    assert_eq!(stale[0]["alias"], "Alex E.");
    assert_eq!(stale[0]["open_count"], 2);
    assert_eq!(stale[0]["oldest_delegation_days"], 7);
}

#[test]
fn overdue_lists_due_checkins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("open.yaml");
    std::fs::write(
        &path,
        "- alias: Alex E.\n  task_title: Task A\n  checkin_date: 2026-02-20\n\
         - alias: Jordan F.\n  task_title: Task B\n  checkin_date: 2026-02-25\n\
         - alias: Riley L.\n  task_title: Task C\n  checkin_date: 2026-02-23\n",
    )
    .unwrap();
    delegate(&dir)
        .args([
            "overdue",
            "--file",
            path.to_str().unwrap(),
            "--today",
            "2026-02-23",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task A"))
        .stdout(predicate::str::contains("Task C"))
        .stdout(predicate::str::contains("Task B").not());
}
