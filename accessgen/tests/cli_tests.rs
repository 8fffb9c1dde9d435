use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const HEADER: &str = "UserID,Name,Email,Department,ReportingManager,Website,RequestStatus,Reason";

/// Scratch project directory for one CLI run.
struct AccessGenTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl AccessGenTestEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().to_path_buf();
        Ok(Self { _tmp: tmp, root })
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    fn write(&self, rel: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(rel);
        fs::write(&path, content)?;
        Ok(path)
    }

    fn accessgen(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("accessgen"));
        cmd.current_dir(&self.root);
        cmd.env_remove("INPUT_FILE")
            .env_remove("DB_PATH")
            .env_remove("TABLE_NAME")
            .env_remove("ACCESSGEN_OUTPUT")
            .env_remove("ACCESSGEN_SEED");
        cmd
    }
}

fn github_gitlab_table(env: &AccessGenTestEnv) -> Result<PathBuf> {
    env.write(
        "history.csv",
        &format!(
            "{HEADER}\n\
USER_001,Mary Smith,mary@example.com,Engineering,John Brown,github.com,Approved,First access granted\n\
USER_002,Kevin Lee,kevin@example.com,Sales,Lisa King,gitlab.com,Rejected,No prior access\n"
        ),
    )
}

fn data_lines(path: &Path) -> Result<Vec<String>> {
    Ok(fs::read_to_string(path)?
        .lines()
        .skip(1)
        .map(str::to_string)
        .collect())
}

#[test]
fn test_generate_writes_csv_and_summary() -> Result<()> {
    let env = AccessGenTestEnv::new()?;

    env.accessgen()
        .args(["generate", "--rows", "40", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Website Access Summary:"))
        .stdout(predicate::str::contains("github.com: Approved = "))
        .stdout(predicate::str::contains("high-security-portal.org: Approved = 0"));

    let output = env.path("user_access_historical_data.csv");
    let content = fs::read_to_string(&output)?;
    assert_eq!(content.lines().next(), Some(HEADER));
    assert_eq!(data_lines(&output)?.len(), 40);
    assert!(content.contains("USER_001,"));
    assert!(content.contains("USER_040,"));
    Ok(())
}

#[test]
fn test_generate_with_seed_is_reproducible() -> Result<()> {
    let env = AccessGenTestEnv::new()?;

    for name in ["a.csv", "b.csv"] {
        env.accessgen()
            .args(["generate", "-r", "25", "--seed", "7", "-o", name])
            .assert()
            .success();
    }

    assert_eq!(
        fs::read_to_string(env.path("a.csv"))?,
        fs::read_to_string(env.path("b.csv"))?
    );
    Ok(())
}

#[test]
fn test_generate_zero_rows() -> Result<()> {
    let env = AccessGenTestEnv::new()?;

    env.accessgen()
        .args(["generate", "--rows", "0", "-o", "empty.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("salesforce.com: Approved = 0, Rejected = 0"));

    assert!(data_lines(&env.path("empty.csv"))?.is_empty());
    Ok(())
}

#[test]
fn test_generate_reads_project_config() -> Result<()> {
    let env = AccessGenTestEnv::new()?;
    env.write(
        "accessgen.yaml",
        "output: configured.csv\n\
generator:\n  rows: 12\n  seed: 5\n\
catalog:\n  websites: [intranet.example, vault.example]\n  completely_rejected: [vault.example]\n",
    )?;

    env.accessgen()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("vault.example: Approved = 0"))
        .stdout(predicate::str::contains("github.com").not());

    let lines = data_lines(&env.path("configured.csv"))?;
    assert_eq!(lines.len(), 12);
    for line in lines.iter().filter(|l| l.contains(",vault.example,")) {
        assert!(line.contains(",Rejected,"));
        assert!(line.contains("Access to vault.example is strictly prohibited"));
    }
    Ok(())
}

#[test]
fn test_lookup_reports_approved_users() -> Result<()> {
    let env = AccessGenTestEnv::new()?;
    github_gitlab_table(&env)?;

    env.accessgen()
        .args(["lookup", "github", "--input", "history.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "We can approve: 1 user(s) have access to github",
        ))
        .stdout(predicate::str::contains("USER_001"))
        .stdout(predicate::str::contains("USER_002").not());
    Ok(())
}

#[test]
fn test_lookup_no_records() -> Result<()> {
    let env = AccessGenTestEnv::new()?;
    github_gitlab_table(&env)?;

    env.accessgen()
        .args(["lookup", "salesforce", "-i", "history.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cannot approve: No access records found",
        ));
    Ok(())
}

#[test]
fn test_lookup_json_output() -> Result<()> {
    let env = AccessGenTestEnv::new()?;
    github_gitlab_table(&env)?;

    let output = env
        .accessgen()
        .args(["lookup", "gitlab", "-i", "history.csv", "--format", "json"])
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["message"], "Cannot approve: No approved access found");
    assert_eq!(json["status"]["kind"], "no_approved");
    assert_eq!(json["rows"][0]["Website"], "gitlab.com");
    Ok(())
}

#[test]
fn test_lookup_missing_table_fails() -> Result<()> {
    let env = AccessGenTestEnv::new()?;

    env.accessgen()
        .args(["lookup", "github", "-i", "missing.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.csv"));
    Ok(())
}

#[test]
fn test_etl_uppercases_names() -> Result<()> {
    let env = AccessGenTestEnv::new()?;
    env.write("data.csv", "name,age\nJohn,30\nJane,25\n")?;

    env.accessgen()
        .args(["etl", "--db-path", "output.duckdb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'output_table' table (2 rows)"));

    let conn = duckdb::Connection::open(env.path("output.duckdb"))?;
    let mut stmt = conn.prepare("SELECT name FROM output_table ORDER BY name")?;
    let names: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<_, _>>()?;
    assert_eq!(names, vec!["JANE".to_string(), "JOHN".to_string()]);
    Ok(())
}

#[test]
fn test_etl_logs_stages_by_default() -> Result<()> {
    let env = AccessGenTestEnv::new()?;
    env.write("data.csv", "name,age\nJohn,30\n")?;

    env.accessgen()
        .env_remove("RUST_LOG")
        .args(["etl", "--db-path", "output.duckdb"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Data extracted from"))
        .stderr(predicate::str::contains("ETL job completed successfully"));
    Ok(())
}

#[test]
fn test_etl_env_configuration_and_add_transform() -> Result<()> {
    let env = AccessGenTestEnv::new()?;
    env.write("people.csv", "name,age\nJohn,30\nJane,25\n")?;

    env.accessgen()
        .env("INPUT_FILE", "people.csv")
        .env("DB_PATH", "people.duckdb")
        .env("TABLE_NAME", "people")
        .args(["etl", "--transform", "add:age:10"])
        .assert()
        .success();

    let conn = duckdb::Connection::open(env.path("people.duckdb"))?;
    let ages: Vec<i64> = conn
        .prepare("SELECT age FROM people ORDER BY age")?
        .query_map([], |row| row.get::<_, i64>(0))?
        .collect::<Result<_, _>>()?;
    assert_eq!(ages, vec![35, 40]);
    Ok(())
}

#[test]
fn test_etl_missing_column_fails() -> Result<()> {
    let env = AccessGenTestEnv::new()?;
    env.write("data.csv", "first_name,age\nJohn,30\n")?;

    env.accessgen()
        .args(["etl", "--db-path", "output.duckdb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Column 'name' not found"));
    Ok(())
}
