//! Drives the server through a real MCP client over an in-memory pipe.

use fmcp_files::{Dispatcher, FileServer, Profile};
use rmcp::{
    RoleClient, ServiceExt,
    model::{CallToolRequestParams, CallToolResult},
    service::RunningService,
};
use serde_json::{Value, json};
use std::borrow::Cow;
use tempfile::TempDir;

async fn connect(profile: Profile) -> (TempDir, RunningService<RoleClient, ()>) {
    let tmp = TempDir::new().unwrap();
    let dispatcher = Dispatcher::open(
        tmp.path().join(profile.default_root()),
        profile.operations(),
    )
    .await
    .unwrap();

    let (server_io, client_io) = tokio::io::duplex(64 * 1024);
    tokio::spawn(async move {
        if let Ok(service) = FileServer::new(dispatcher).serve(server_io).await {
            let _ = service.waiting().await;
        }
    });
    let client = ().serve(client_io).await.expect("client should connect");
    (tmp, client)
}

async fn call(client: &RunningService<RoleClient, ()>, name: &str, args: Value) -> CallToolResult {
    let arguments = match args {
        Value::Object(map) => Some(map),
        _ => None,
    };
    client
        .peer()
        .call_tool(CallToolRequestParams {
            meta: None,
            name: Cow::Owned(name.to_string()),
            arguments,
            task: None,
        })
        .await
        .expect("tool call should not be a protocol error")
}

fn text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.as_text())
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
async fn catalog_declares_required_fields() {
    let (_tmp, client) = connect(Profile::Files).await;
    let tools = client.peer().list_all_tools().await.unwrap();

    let mut names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
    names.sort();
    assert_eq!(names, ["analyze_file", "list_files", "read_file", "upload_file"]);

    let upload = tools.iter().find(|t| t.name == "upload_file").unwrap();
    let required = upload.input_schema.get("required").cloned().unwrap();
    let required: Vec<String> = serde_json::from_value(required).unwrap();
    assert!(required.contains(&"filename".to_string()));
    assert!(required.contains(&"content".to_string()));

    client.cancel().await.ok();
}

#[tokio::test]
async fn file_session() {
    let (tmp, client) = connect(Profile::Files).await;

    let result = call(&client, "list_files", json!({})).await;
    assert_eq!(text(&result), "No files found in uploads directory.");

    let result = call(
        &client,
        "upload_file",
        json!({ "filename": "test.txt", "content": "a b\nc" }),
    )
    .await;
    assert_ne!(result.is_error, Some(true));
    assert_eq!(result.content.len(), 1);
    assert!(text(&result).contains("(5 characters)"));

    call(
        &client,
        "upload_file",
        json!({ "filename": "example.txt", "content": "sample" }),
    )
    .await;

    let result = call(&client, "list_files", json!({})).await;
    assert_eq!(
        text(&result),
        "Files in uploads directory (2):\n  • example.txt\n  • test.txt"
    );

    let result = call(&client, "read_file", json!({ "filename": "test.txt" })).await;
    assert_eq!(text(&result), "Content of 'test.txt':\n\na b\nc");

    let result = call(&client, "analyze_file", json!({ "filename": "test.txt" })).await;
    let report = text(&result);
    assert!(report.contains("Characters: 5"));
    assert!(report.contains("Words:      3"));
    assert!(report.contains("Lines:      2"));

    let result = call(&client, "read_file", json!({ "filename": "nonexistent.txt" })).await;
    assert_eq!(result.is_error, Some(true));
    assert!(text(&result).contains("not found"));
    assert!(!text(&result).contains("Invalid filename"));

    let result = call(
        &client,
        "upload_file",
        json!({ "filename": "../malicious.txt", "content": "blocked" }),
    )
    .await;
    assert_eq!(result.is_error, Some(true));
    assert!(text(&result).contains("Invalid filename '../malicious.txt'"));
    assert!(!tmp.path().join("malicious.txt").exists());

    client.cancel().await.ok();
}

#[tokio::test]
async fn log_session() {
    let (tmp, client) = connect(Profile::Logs).await;
    std::fs::write(tmp.path().join("logs").join("app.log"), "ERROR disk full\n").unwrap();

    let tools = client.peer().list_all_tools().await.unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name, "read_log_file");

    let result = call(&client, "read_log_file", json!({ "filename": "app.log" })).await;
    assert_eq!(text(&result), "ERROR disk full\n");

    let result = call(&client, "read_log_file", json!({ "filename": "../app.log" })).await;
    assert_eq!(result.is_error, Some(true));

    client.cancel().await.ok();
}
