/// End-to-end tests for the CLI
mod test_utilities;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use test_utilities::fixtures::{create_sample_graph, write_graph};

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        let dir = TempDir::new().unwrap();
        let graph = create_sample_graph(dir.path());
        cargo_bin_cmd!("osgi-mavenize")
            .arg("--graph")
            .arg(&graph)
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("osgi-mavenize").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("osgi-mavenize")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 2: Missing required --graph
    #[test]
    fn test_exit_code_missing_graph_argument() {
        cargo_bin_cmd!("osgi-mavenize").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("osgi-mavenize")
            .args(["-g", "bundles.toml", "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid target value
    #[test]
    fn test_exit_code_invalid_target() {
        cargo_bin_cmd!("osgi-mavenize")
            .args(["-g", "bundles.toml", "--target", "android"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - non-existent graph file
    #[test]
    fn test_exit_code_application_error_missing_graph() {
        cargo_bin_cmd!("osgi-mavenize")
            .args(["-g", "/nonexistent/path/bundles.toml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Bundle graph file not found"));
    }

    /// Exit code 3: Application error - requirement on an undeclared bundle
    #[test]
    fn test_exit_code_application_error_invalid_graph() {
        let dir = TempDir::new().unwrap();
        let graph = write_graph(
            dir.path(),
            r#"
[[bundle]]
symbolic_name = "a"
version = "1.0.0"
location = "a.jar"

[[bundle.requires]]
symbolic_name = "ghost"
"#,
        );
        cargo_bin_cmd!("osgi-mavenize")
            .arg("-g")
            .arg(&graph)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("undeclared bundle 'ghost'"));
    }

    /// Exit code 3: Application error - invalid bundle directive option
    #[test]
    fn test_exit_code_application_error_invalid_directive() {
        let dir = TempDir::new().unwrap();
        let graph = create_sample_graph(dir.path());
        cargo_bin_cmd!("osgi-mavenize")
            .arg("-g")
            .arg(&graph)
            .args(["-D", "org.example.api@directive=sometimes"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("'sometimes'"));
    }
}

#[test]
fn test_e2e_json_manifest_on_stdout() {
    let dir = TempDir::new().unwrap();
    let graph = create_sample_graph(dir.path());

    let output = cargo_bin_cmd!("osgi-mavenize")
        .arg("--graph")
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["tool"]["name"], "osgi-mavenize");
    assert_eq!(json["summary"]["bundles"], 2);
    assert_eq!(json["summary"]["artifactBundles"], 3);
    assert_eq!(json["sourceBundles"][0], "org.example.core.source_1.0.0");

    let core = &json["bundles"][0];
    assert_eq!(core["bundle"], "org.example.core_1.0.0");
    let main = &core["artifactBundles"][0];
    assert_eq!(main["pom"]["groupId"], "org.example");
    assert_eq!(main["pom"]["artifactId"], "org.example.core");
    assert_eq!(main["pom"]["dependencies"][0]["artifactId"], "org.example.api");
    assert_eq!(main["pom"]["dependencies"][0]["version"], "[1,2)");
    assert_eq!(main["pom"]["dependencies"][1]["groupId"], "hans");
    assert_eq!(main["pom"]["dependencies"][1]["version"], "3");
    assert_eq!(main["artifacts"][1]["classifier"], "sources");
    assert_eq!(core["artifactBundles"][1]["pom"]["artifactId"], "wurst");

    assert_eq!(json["bundles"][1]["bundle"], "org.example.api_1.2.0");
}

#[test]
fn test_e2e_markdown_report_to_file() {
    let dir = TempDir::new().unwrap();
    let graph = create_sample_graph(dir.path());
    let report = dir.path().join("report.md");

    cargo_bin_cmd!("osgi-mavenize")
        .arg("-g")
        .arg(&graph)
        .args(["--format", "markdown", "--output"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Manifest written"));

    let content = fs::read_to_string(&report).unwrap();
    assert!(content.starts_with("# OSGi Mavenization Report"));
    assert!(content.contains("### org.example.core_1.0.0"));
    assert!(content.contains("| hans:wurst | 3 | compile | no |"));
}

#[test]
fn test_e2e_work_dir_keeps_staged_libraries() {
    let dir = TempDir::new().unwrap();
    let graph = create_sample_graph(dir.path());
    let work_dir = dir.path().join("work");

    cargo_bin_cmd!("osgi-mavenize")
        .arg("-g")
        .arg(&graph)
        .arg("--work-dir")
        .arg(&work_dir)
        .assert()
        .success();

    assert!(work_dir
        .join("org.example.core_1.0.0")
        .join("lib/wurst.jar")
        .is_file());
}

#[test]
fn test_e2e_replace_directive_from_command_line() {
    let dir = TempDir::new().unwrap();
    let graph = create_sample_graph(dir.path());

    cargo_bin_cmd!("osgi-mavenize")
        .arg("-g")
        .arg(&graph)
        .args(["-D", "org.example.core/lib/wurst.jar=com.acme:wurst:jar:4.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("com.acme:wurst:jar:4.0"))
        .stdout(predicate::str::contains("hans:wurst").not());
}

#[test]
fn test_e2e_missing_library_is_a_warning() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("bundles/app")).unwrap();
    let graph = write_graph(
        dir.path(),
        r#"
[[bundle]]
symbolic_name = "org.example.app"
version = "1.0.0"
location = "bundles/app"
classpath = [".", "lib/gone.jar"]
"#,
    );

    cargo_bin_cmd!("osgi-mavenize")
        .arg("-g")
        .arg(&graph)
        .assert()
        .code(0)
        .stderr(predicate::str::contains(
            "embedded library 'lib/gone.jar' not found",
        ));

    cargo_bin_cmd!("osgi-mavenize")
        .arg("-g")
        .arg(&graph)
        .arg("--strict")
        .assert()
        .code(1);
}

#[test]
fn test_e2e_orphaned_source_bundle_is_reported() {
    let dir = TempDir::new().unwrap();
    let graph = write_graph(
        dir.path(),
        r#"
[[bundle]]
symbolic_name = "org.example.ghost.source"
version = "1.0.0"
location = "ghost.source.jar"
headers = { "Eclipse-SourceBundle" = "org.example.ghost;version=\"1.0.0\"" }
"#,
    );

    cargo_bin_cmd!("osgi-mavenize")
        .arg("-g")
        .arg(&graph)
        .arg("--strict")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("was not mavenized"));
}
