//! Machine-readable JSON output shared by all commands.

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

const REPORT_SCHEMA: &str = "cmms-validate.report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ReportPayload<'a, T: Serialize> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub command: &'a str,
    pub valid: bool,
    pub result: &'a T,
}

impl<'a, T: Serialize> ReportPayload<'a, T> {
    pub fn new(command: &'a str, valid: bool, result: &'a T) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            command,
            valid,
            result,
        }
    }
}

pub fn render_json<T: Serialize>(command: &str, valid: bool, result: &T) -> Result<String> {
    let payload = ReportPayload::new(command, valid, result);
    Ok(serde_json::to_string_pretty(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_schema_and_result() {
        let rendered = render_json("color", false, &serde_json::json!({"value": "red"}))
            .expect("render");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("parse");
        assert_eq!(value["schema"], REPORT_SCHEMA);
        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["command"], "color");
        assert_eq!(value["valid"], false);
        assert_eq!(value["result"]["value"], "red");
        assert!(value["generated_at"].as_str().is_some());
    }
}
