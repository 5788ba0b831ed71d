//! Command for calling a tool on the server.

use crate::error::Error;
use rmcp::{
    RoleClient,
    model::{CallToolRequestParams, CallToolResult, JsonObject},
    service::RunningService,
};
use serde_json::Value;
use std::borrow::Cow;

/// Build a tool's argument object from `key=value` words.
///
/// Everything after the first `=` is the value, kept as a JSON string since
/// every file tool takes string fields. No words means no arguments.
pub fn arguments(pairs: &[String]) -> Result<Option<JsonObject>, Error> {
    let object = pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                Ok((key.to_owned(), Value::String(value.to_owned())))
            }
            _ => Err(Error::InvalidArg(pair.clone())),
        })
        .collect::<Result<JsonObject, Error>>()?;
    Ok((!object.is_empty()).then_some(object))
}

/// Call a tool on the connected server.
pub async fn call(
    service: &RunningService<RoleClient, ()>,
    name: String,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, Error> {
    let result = service
        .peer()
        .call_tool(CallToolRequestParams {
            meta: None,
            name: Cow::Owned(name),
            arguments,
            task: None,
        })
        .await?;
    Ok(result)
}

/// Join the text blocks of a tool result, one per line.
pub fn render(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.as_text())
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
