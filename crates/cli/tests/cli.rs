use assert_cmd::Command;
use std::path::Path;

const WORKSPACE_INFO: &str = r#"{
    "MsBuild": {
        "Projects": [
            {
                "Path": "app/app.csproj",
                "AssemblyName": "app",
                "TargetFrameworks": [{ "ShortName": "net8.0" }],
                "IsExe": true,
                "SourceFiles": ["Program.cs"]
            }
        ]
    }
}"#;

fn workspace() -> tempfile::TempDir {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("workspace-info.json"), WORKSPACE_INFO).unwrap();
    temp_dir
}

fn assetgen(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("assetgen").unwrap();
    cmd.env("NO_COLOR", "1").arg("--workspace").arg(root);
    cmd
}

fn stdout(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_list_shows_projects() {
    let temp_dir = workspace();
    let out = stdout(assetgen(temp_dir.path()).arg("list"));

    assert!(out.contains("app"));
    assert!(out.contains("${workspaceFolder}/app/app.csproj"));
}

#[test]
fn test_generate_writes_documents() {
    let temp_dir = workspace();
    assetgen(temp_dir.path()).arg("generate").assert().success();

    let tasks: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(temp_dir.path().join(".vscode").join("tasks.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(tasks["tasks"][0]["args"][1], "${workspaceFolder}/app/app.csproj");

    let launch: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(temp_dir.path().join(".vscode").join("launch.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(
        launch["configurations"][0]["program"],
        "${workspaceFolder}/app/bin/Debug/net8.0/app.dll"
    );
}

#[test]
fn test_generate_dry_run_writes_nothing() {
    let temp_dir = workspace();
    let out = stdout(
        assetgen(temp_dir.path())
            .arg("generate")
            .arg("--dry-run")
            .arg("--launch-type")
            .arg("blazor-standalone"),
    );

    assert!(out.contains("blazorwasm"));
    assert!(!temp_dir.path().join(".vscode").exists());
}

#[test]
fn test_invalid_startup_fails() {
    let temp_dir = workspace();
    assetgen(temp_dir.path())
        .args(["generate", "--startup", "3"])
        .assert()
        .failure();
}

#[test]
fn test_diagnostics_replay_hides_closed_documents_in_large_workspace() {
    let temp_dir = workspace();
    let open = temp_dir.path().join("app").join("Program.cs");
    let closed = temp_dir.path().join("app").join("Other.cs");
    let message = serde_json::json!({
        "Results": [
            {
                "FileName": open.display().to_string(),
                "QuickFixes": [{ "Id": "CS8019", "Text": "Unnecessary using directive.", "LogLevel": "Hidden" }]
            },
            {
                "FileName": closed.display().to_string(),
                "QuickFixes": [{ "Id": "CS1002", "Text": "; expected", "LogLevel": "Error" }]
            }
        ]
    });
    let input = temp_dir.path().join("diagnostics.jsonl");
    std::fs::write(&input, format!("{message}\n")).unwrap();

    let out = stdout(
        assetgen(temp_dir.path())
            .arg("diagnostics")
            .arg(&input)
            .arg("--open")
            .arg(&open)
            .arg("--large"),
    );

    assert!(out.contains("CS8019"));
    assert!(out.contains("unnecessary"));
    assert!(!out.contains("CS1002"));
}

#[test]
fn test_schema_prints_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out = stdout(assetgen(temp_dir.path()).arg("schema"));
    let schema: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(schema.get("properties").is_some());
}

fn diagnostics_input(dir: &Path) -> std::path::PathBuf {
    let file = dir.join("app").join("Program.cs");
    let message = serde_json::json!({
        "Results": [{
            "FileName": file.display().to_string(),
            "QuickFixes": [{ "Id": "CS1002", "Text": "; expected", "LogLevel": "Error" }]
        }]
    });
    let input = dir.join("diagnostics.jsonl");
    std::fs::write(&input, format!("{message}\n")).unwrap();
    input
}

#[test]
fn test_diagnostics_without_workspace_information_falls_back() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = diagnostics_input(temp_dir.path());

    let out = stdout(assetgen(temp_dir.path()).arg("diagnostics").arg(&input));

    assert!(out.contains("CS1002"));
}

#[test]
fn test_diagnostics_with_corrupt_workspace_information_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("workspace-info.json"), "{ \"MsBuild\": ").unwrap();
    let input = diagnostics_input(temp_dir.path());

    let output = assetgen(temp_dir.path())
        .arg("diagnostics")
        .arg(&input)
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    assert!(String::from_utf8(output).unwrap().contains("Failed to initialize workspace"));
}

#[test]
fn test_relative_info_path_is_resolved_from_current_directory() {
    let temp_dir = workspace();
    let elsewhere = tempfile::tempdir().unwrap();
    std::fs::copy(
        temp_dir.path().join("workspace-info.json"),
        elsewhere.path().join("info.json"),
    )
    .unwrap();
    std::fs::remove_file(temp_dir.path().join("workspace-info.json")).unwrap();

    let out = stdout(
        assetgen(temp_dir.path())
            .current_dir(elsewhere.path())
            .arg("-i")
            .arg("info.json")
            .arg("list"),
    );

    assert!(out.contains("app"));
}
