use chrono::{Days, Local};
use httpmock::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn liturgia() -> Command {
    Command::new(env!("CARGO_BIN_EXE_liturgia"))
}

#[test]
fn test_export_names_file_after_today() {
    let temp_dir = TempDir::new().unwrap();
    let today = Local::now().date_naive();
    let requested = today.checked_sub_days(Days::new(1)).unwrap();
    let requested_str = requested.format("%Y-%m-%d").to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/liturgy/{}", requested_str));
        then.status(200).json_body(serde_json::json!({
            "success": true,
            "celebration": "Feria",
            "color": "verde",
            "readings": {"gospel": "Mc 1,14-20"}
        }));
    });

    let output = liturgia()
        .args(["--base-url", &server.base_url(), "export", &requested_str, "--output"])
        .arg(temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    api_mock.assert();

    let expected = temp_dir
        .path()
        .join(format!("liturgia_{}.txt", today.format("%Y-%m-%d")));
    assert!(expected.exists());
    assert!(!temp_dir
        .path()
        .join(format!("liturgia_{}.txt", requested_str))
        .exists());
    let saved = std::fs::read_to_string(expected).unwrap();
    assert!(saved.contains("EVANGELHO\nMc 1,14-20"));
}

#[test]
fn test_load_rejects_date_outside_picker_range() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!({"success": true}));
    });

    let too_far = Local::now()
        .date_naive()
        .checked_add_days(Days::new(800))
        .unwrap()
        .format("%Y-%m-%d")
        .to_string();

    let output = liturgia()
        .args(["--base-url", &server.base_url(), "load", &too_far])
        .output()
        .unwrap();

    assert!(!output.status.success());
    api_mock.assert_hits(0);
}
