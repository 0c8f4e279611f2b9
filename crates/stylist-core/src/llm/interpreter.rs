//! Response interpreter for the doubly-encoded model answer.
//!
//! The provider returns an envelope JSON whose message content is itself
//! JSON text. The two parses are separate stages with separate errors, so a
//! broken provider API ("envelope") is distinguishable from a model that
//! ignored the output format ("payload").

use super::prompt::RESULT_KEYS;
use super::provider::ProviderVariant;
use super::{ollama, openai};
use crate::error::{Result, StylistError};
use crate::types::StyleAnalysisResult;
use serde_json::{Map, Value};

/// Turn a raw HTTP body into a validated result.
///
/// `variant` must be the protocol the request was sent with; the content
/// path is never guessed.
pub fn interpret(raw_body: &[u8], variant: ProviderVariant) -> Result<StyleAnalysisResult> {
    let envelope = parse_envelope(raw_body)?;
    let content = extract_content(&envelope, variant)?;
    let answer = parse_answer(content)?;
    validate_keys(&answer)?;
    build_result(&answer, content)
}

fn parse_envelope(raw_body: &[u8]) -> Result<Value> {
    serde_json::from_slice(raw_body).map_err(|e| {
        let preview = String::from_utf8_lossy(&raw_body[..raw_body.len().min(200)]);
        StylistError::MalformedEnvelope(format!("{e} (body starts with: {preview:?})"))
    })
}

fn extract_content(envelope: &Value, variant: ProviderVariant) -> Result<&str> {
    match variant {
        ProviderVariant::CloudChat => openai::extract_content(envelope)
            .ok_or(StylistError::MissingContentField(openai::CONTENT_PATH)),
        ProviderVariant::LocalModel => ollama::extract_content(envelope)
            .ok_or(StylistError::MissingContentField(ollama::CONTENT_PATH)),
    }
}

fn parse_answer(content: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(StylistError::MalformedPayload {
            message: format!("expected a JSON object, got {}", json_type_name(&other)),
            raw: content.to_string(),
        }),
        Err(e) => Err(StylistError::MalformedPayload {
            message: e.to_string(),
            raw: content.to_string(),
        }),
    }
}

/// Presence check only: `null` is a legitimate value for `outfitSuggestion`.
fn validate_keys(answer: &Map<String, Value>) -> Result<()> {
    match RESULT_KEYS.iter().find(|key| !answer.contains_key(**key)) {
        Some(missing) => Err(StylistError::MissingResultKey((*missing).to_string())),
        None => Ok(()),
    }
}

fn build_result(answer: &Map<String, Value>, raw: &str) -> Result<StyleAnalysisResult> {
    Ok(StyleAnalysisResult::new(
        required_text(answer, "objectiveDescription", raw)?,
        required_text(answer, "styleAnalysis", raw)?,
        coerce_bool(field(answer, "isStyleMatch")),
        optional_text(answer, "outfitSuggestion", raw)?,
        required_text(answer, "occasionAnalysis", raw)?,
    ))
}

static NULL: Value = Value::Null;

fn field<'a>(answer: &'a Map<String, Value>, key: &str) -> &'a Value {
    answer.get(key).unwrap_or(&NULL)
}

/// Loose truthiness: models sometimes answer `"true"` or `1`.
fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => {
            let s = s.trim();
            !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
        }
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn required_text(answer: &Map<String, Value>, key: &str, raw: &str) -> Result<String> {
    let value = field(answer, key);
    scalar_text(value).ok_or_else(|| StylistError::MalformedPayload {
        message: format!("'{key}' must be a string, got {}", json_type_name(value)),
        raw: raw.to_string(),
    })
}

fn optional_text(answer: &Map<String, Value>, key: &str, raw: &str) -> Result<Option<String>> {
    match field(answer, key) {
        Value::Null => Ok(None),
        value => scalar_text(value)
            .map(Some)
            .ok_or_else(|| StylistError::MalformedPayload {
                message: format!("'{key}' must be a string or null, got {}", json_type_name(value)),
                raw: raw.to_string(),
            }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
