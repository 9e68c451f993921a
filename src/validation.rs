//! Request body validation.
//!
//! Bodies are read as loose JSON and fields pulled out by hand so that a
//! missing or mistyped field turns into a message in the `errors` list
//! instead of a framework rejection. Messages accumulate; one response
//! reports every problem.

use crate::error::AppError;
use serde_json::Value;

pub const MIN_AGE: i64 = 8;
pub const MAX_AGE: i64 = 18;

/// Validated `{name, age}` body for camper create and update.
#[derive(Debug)]
pub struct CamperPayload {
    pub name: String,
    pub age: i64,
}

/// Validated `{time, camper_id, activity_id}` body for signup create.
#[derive(Debug)]
pub struct SignupPayload {
    pub time: String,
    pub camper_id: i64,
    pub activity_id: i64,
}

fn as_object(body: &Value) -> Result<&serde_json::Map<String, Value>, AppError> {
    body.as_object()
        .ok_or_else(|| AppError::BadRequest("body must be a JSON object".into()))
}

/// Applied on both create and PATCH: age must stay in [8,18] for the
/// lifetime of the record.
pub fn camper_payload(body: &Value) -> Result<CamperPayload, AppError> {
    let obj = as_object(body)?;
    let mut errors = Vec::new();

    let name = obj.get("name").and_then(Value::as_str).unwrap_or("");
    if name.is_empty() {
        errors.push("Name must not be empty".to_string());
    }

    let age = obj.get("age").and_then(Value::as_i64);
    if !age.is_some_and(|a| (MIN_AGE..=MAX_AGE).contains(&a)) {
        errors.push(format!("Age must be between {} and {}", MIN_AGE, MAX_AGE));
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    Ok(CamperPayload {
        name: name.to_string(),
        age: age.unwrap_or_default(),
    })
}

pub fn signup_payload(body: &Value) -> Result<SignupPayload, AppError> {
    let obj = as_object(body)?;
    let mut errors = Vec::new();

    let time = obj.get("time").and_then(Value::as_str).unwrap_or("");
    if time.is_empty() {
        errors.push("Time must not be empty".to_string());
    }

    let camper_id = obj.get("camper_id").and_then(Value::as_i64);
    if camper_id.is_none() {
        errors.push("camper_id must be an integer".to_string());
    }
    let activity_id = obj.get("activity_id").and_then(Value::as_i64);
    if activity_id.is_none() {
        errors.push("activity_id must be an integer".to_string());
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    Ok(SignupPayload {
        time: time.to_string(),
        camper_id: camper_id.unwrap_or_default(),
        activity_id: activity_id.unwrap_or_default(),
    })
}
