//! CLI integration tests. Every run uses local files so no network is needed.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FEED: &str = r#"[
    {"currency":"ETH","date":"2023-08-29T07:10:30.000Z","price":1600},
    {"currency":"ETH","date":"2023-08-29T07:10:52.000Z","price":1645.9337},
    {"currency":"OSMO","date":"2023-08-29T07:10:40.000Z","price":0.4},
    {"currency":"DEAD","date":"2023-08-29T07:10:40.000Z","price":0}
]"#;

const WALLET: &str = r#"[
    {"currency":"ETH","amount":0.5,"blockchain":"Ethereum"},
    {"currency":"OSMO","amount":12.5,"blockchain":"Osmosis"},
    {"currency":"ABC","amount":50,"blockchain":"UnknownChain"},
    {"currency":"NEO","amount":0,"blockchain":"Neo"}
]"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(wallet: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("prices.json"), FEED).expect("write feed");
        std::fs::write(dir.path().join("balances.json"), wallet).expect("write wallet");
        Self { dir }
    }

    fn path(&self, name: &str) -> String {
        self.dir.path().join(name).display().to_string()
    }

    /// A command running inside the workspace with no config file present.
    fn tokenboard(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("tokenboard");
        cmd.current_dir(self.dir.path())
            .env_remove("TOKENBOARD_PRICES_URL")
            .env_remove("TOKENBOARD_BALANCES")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn test_help_lists_commands() {
    cargo_bin_cmd!("tokenboard")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("balances"))
        .stdout(predicate::str::contains("tokens"))
        .stdout(predicate::str::contains("price"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_balances_table_is_ranked() {
    let ws = Workspace::new(WALLET);
    let output = ws
        .tokenboard()
        .args(["balances", "--prices-file", "prices.json", "--balances", "balances.json"])
        .output()
        .expect("run tokenboard");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let osmo = stdout.find("OSMO").expect("OSMO row");
    let eth = stdout.find("ETH").expect("ETH row");
    assert!(osmo < eth, "OSMO should rank above ETH:\n{stdout}");
    assert!(!stdout.contains("ABC"));
    assert!(stdout.contains("$822.97"));
    assert!(stdout.contains("12.5"));
}

#[test]
fn test_balances_json_output() {
    let ws = Workspace::new(WALLET);
    let output = ws
        .tokenboard()
        .args(["--json", "balances", "--prices-file"])
        .arg(ws.path("prices.json"))
        .arg("--balances")
        .arg(ws.path("balances.json"))
        .output()
        .expect("run tokenboard");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout
        .lines()
        .find(|l| l.contains("\"balances\""))
        .expect("balances line");
    let value: serde_json::Value = serde_json::from_str(line).unwrap();
    let rows = value["payload"]["rows"].as_array().unwrap();
    let currencies: Vec<&str> = rows
        .iter()
        .map(|r| r["currency"].as_str().unwrap())
        .collect();
    assert_eq!(currencies, vec!["OSMO", "ETH"]);
    assert_eq!(rows[1]["formatted_amount"], "0.5");
    assert_eq!(value["payload"]["filtered_out"], 2);
}

#[test]
fn test_balances_empty_state() {
    let ws = Workspace::new(r#"[{"currency":"ABC","amount":1,"blockchain":"Nowhere"}]"#);
    ws.tokenboard()
        .args(["balances", "--prices-file", "prices.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No assets found."));
}

#[test]
fn test_balances_missing_file_fails() {
    let ws = Workspace::new(WALLET);
    ws.tokenboard()
        .args(["balances", "--prices-file", "prices.json", "--balances", "absent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn test_balances_survive_unreadable_feed() {
    let ws = Workspace::new(WALLET);
    ws.tokenboard()
        .args(["balances", "--prices-file", "missing-feed.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OSMO"))
        .stdout(predicate::str::contains("$0.00"));
}

#[test]
fn test_tokens_hide_non_positive_prices() {
    let ws = Workspace::new(WALLET);
    ws.tokenboard()
        .args(["tokens", "--prices-file", "prices.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ETH"))
        .stdout(predicate::str::contains("1645.9337"))
        .stdout(predicate::str::contains("OSMO"))
        .stdout(predicate::str::contains("DEAD").not());
}

#[test]
fn test_price_shows_latest() {
    let ws = Workspace::new(WALLET);
    ws.tokenboard()
        .args(["price", "ETH", "--prices-file", "prices.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1645.9337"))
        .stdout(predicate::str::contains("2023-08-29 07:10:52 UTC"));
}

#[test]
fn test_price_unknown_symbol_fails() {
    let ws = Workspace::new(WALLET);
    ws.tokenboard()
        .args(["price", "NOPE", "--prices-file", "prices.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("token NOPE not found"));
}

#[test]
fn test_config_init_then_validate() {
    let ws = Workspace::new(WALLET);
    ws.tokenboard()
        .args(["config", "init", "tokenboard.toml"])
        .assert()
        .success();
    ws.tokenboard()
        .args(["config", "validate", "-c", "tokenboard.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file is valid"));
    ws.tokenboard()
        .args(["config", "init", "tokenboard.toml"])
        .assert()
        .failure();
}

#[test]
fn test_config_validate_reports_invalid_value() {
    let ws = Workspace::new(WALLET);
    std::fs::write(ws.dir.path().join("bad.toml"), "[prices]\ntimeout_secs = 0\n")
        .expect("write config");
    ws.tokenboard()
        .args(["config", "validate", "-c", "bad.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("prices.timeout_secs"));
}

#[test]
fn test_config_validate_rejects_unparseable_url() {
    let ws = Workspace::new(WALLET);
    std::fs::write(
        ws.dir.path().join("tokenboard.toml"),
        "[prices]\nurl = \"not a url\"\n",
    )
    .expect("write config");
    ws.tokenboard()
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("prices.url"));
}

#[test]
fn test_config_show_lists_tiers() {
    let ws = Workspace::new(WALLET);
    ws.tokenboard()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Osmosis"))
        .stdout(predicate::str::contains("(unknown)"))
        .stdout(predicate::str::contains("-99"));
}
