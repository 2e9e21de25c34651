//! Request extractors.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Form, FromRequest, FromRequestParts, Multipart, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts},
};
use menuboard_common::AppError;
use menuboard_core::{Claims, ImageUpload};
use serde_json::Value;

/// Marker left in request extensions when a bearer token failed verification.
#[derive(Debug, Clone, Copy)]
pub struct InvalidToken;

/// Authenticated admin extractor.
///
/// Rejects with 401 when no token was sent and 403 when the token is
/// invalid or expired.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(claims) = parts.extensions.get::<Claims>() {
            return Ok(Self(claims.clone()));
        }

        if parts.extensions.get::<InvalidToken>().is_some() {
            return Err(AppError::Forbidden("Invalid or expired token".to_string()));
        }

        Err(AppError::Unauthorized(
            "Access denied. No token provided".to_string(),
        ))
    }
}

/// Positive integer `{id}` path parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdParam(pub i32);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;

        parse_id(&raw).map(Self)
    }
}

/// Digits-only ids beyond the `i32` range name no row and are not found.
fn parse_id(raw: &str) -> Result<i32, AppError> {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_id());
    }

    match digits.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        Ok(_) => Err(invalid_id()),
        Err(_) => Err(AppError::NotFound("Record not found".to_string())),
    }
}

fn invalid_id() -> AppError {
    AppError::Validation("Invalid id".to_string())
}

/// Request body fields, from multipart, urlencoded or JSON bodies.
///
/// Every value is kept as text; handlers coerce them to typed input.
/// `name[]` fields are stored under `name`.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, Vec<String>>,
    files: HashMap<String, ImageUpload>,
}

impl<S> FromRequest<S> for FormData
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            return Self::from_multipart(multipart).await;
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            let mut form = Self::default();
            for (name, value) in pairs {
                form.push(&name, value);
            }
            return Ok(form);
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        if !content_type.is_empty() && !content_type.contains("json") {
            return Err(AppError::BadRequest(format!(
                "Unsupported content type: {content_type}"
            )));
        }

        let value: Value = serde_json::from_slice(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?;
        Self::from_json(value)
    }
}

impl FormData {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();

            if let Some(file_name) = field.file_name().map(ToString::to_string) {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;

                // Browsers send an empty part for an untouched file input
                if file_name.is_empty() && data.is_empty() {
                    continue;
                }

                form.files
                    .insert(normalize_name(&name), ImageUpload::new(file_name, data));
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                form.push(&name, value);
            }
        }

        Ok(form)
    }

    fn from_json(value: Value) -> Result<Self, AppError> {
        let Value::Object(map) = value else {
            return Err(AppError::BadRequest(
                "Request body must be a JSON object".to_string(),
            ));
        };

        let mut form = Self::default();
        for (name, value) in map {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    let entry = form.fields.entry(normalize_name(&name)).or_default();
                    entry.extend(items.into_iter().filter_map(json_scalar));
                }
                other => {
                    if let Some(text) = json_scalar(other) {
                        form.push(&name, text);
                    }
                }
            }
        }

        Ok(form)
    }

    fn push(&mut self, name: &str, value: String) {
        self.fields
            .entry(normalize_name(name))
            .or_default()
            .push(value);
    }

    /// First value of a field.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// First value of a field, or an empty string when absent.
    #[must_use]
    pub fn text_or_default(&self, name: &str) -> String {
        self.text(name).unwrap_or_default().to_string()
    }

    /// Owned first value of a field.
    #[must_use]
    pub fn string(&self, name: &str) -> Option<String> {
        self.text(name).map(ToString::to_string)
    }

    /// Integer field. Absent or blank is `None`; anything else must parse.
    pub fn int(&self, name: &str, message: &str) -> Result<Option<i32>, AppError> {
        match self.text(name).map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<i32>()
                .map(Some)
                .map_err(|_| AppError::Validation(message.to_string())),
        }
    }

    /// Integer field that must be present.
    pub fn required_int(&self, name: &str, message: &str) -> Result<i32, AppError> {
        self.int(name, message)?
            .ok_or_else(|| AppError::Validation(message.to_string()))
    }

    /// Finite number field. Absent or blank is `None`.
    pub fn number(&self, name: &str, message: &str) -> Result<Option<f64>, AppError> {
        match self.text(name).map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Some)
                .ok_or_else(|| AppError::Validation(message.to_string())),
        }
    }

    /// Number field that must be present.
    pub fn required_number(&self, name: &str, message: &str) -> Result<f64, AppError> {
        self.number(name, message)?
            .ok_or_else(|| AppError::Validation(message.to_string()))
    }

    /// Boolean field, accepting `true`/`false`, `1`/`0` and `on`/`off`.
    /// Absent or blank is `None`.
    pub fn boolean(&self, name: &str) -> Result<Option<bool>, AppError> {
        match self.text(name).map(|v| v.trim().to_ascii_lowercase()) {
            None => Ok(None),
            Some(raw) => match raw.as_str() {
                "" => Ok(None),
                "true" | "1" | "on" => Ok(Some(true)),
                "false" | "0" | "off" => Ok(Some(false)),
                _ => Err(AppError::Validation(format!("{name} must be a boolean"))),
            },
        }
    }

    /// List field.
    ///
    /// Repeated fields and JSON array values are both accepted; a single
    /// value holding a JSON array string is expanded.
    #[must_use]
    pub fn list(&self, name: &str) -> Option<Vec<String>> {
        let values = self.fields.get(name)?;

        if let [single] = values.as_slice() {
            if single.trim_start().starts_with('[') {
                if let Ok(items) = serde_json::from_str::<Vec<Value>>(single) {
                    return Some(items.into_iter().filter_map(json_scalar).collect());
                }
            }
        }

        Some(
            values
                .iter()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .collect(),
        )
    }

    /// Take an uploaded file out of the form.
    pub fn take_file(&mut self, name: &str) -> Option<ImageUpload> {
        self.files.remove(name)
    }
}

fn normalize_name(name: &str) -> String {
    name.strip_suffix("[]").unwrap_or(name).to_string()
}

fn json_scalar(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12").unwrap(), 12);
        assert_eq!(parse_id("2147483647").unwrap(), i32::MAX);
        for raw in ["0", "-3", "abc", "12abc", "", "1.5"] {
            assert!(
                matches!(parse_id(raw), Err(AppError::Validation(_))),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_parse_id_out_of_range_is_not_found() {
        for raw in ["2147483648", "99999999999999999999999"] {
            assert!(
                matches!(parse_id(raw), Err(AppError::NotFound(_))),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_json_values_become_text() {
        let form = FormData::from_json(json!({
            "titleEN": "Drinks",
            "position": 3,
            "isCombo": true,
            "ingridientsEN": ["salt", "pepper"],
            "image": null
        }))
        .unwrap();

        assert_eq!(form.text("titleEN"), Some("Drinks"));
        assert_eq!(form.int("position", "Position must be number").unwrap(), Some(3));
        assert_eq!(form.boolean("isCombo").unwrap(), Some(true));
        assert_eq!(
            form.list("ingridientsEN"),
            Some(vec!["salt".to_string(), "pepper".to_string()])
        );
        assert_eq!(form.text("image"), None);
    }

    #[test]
    fn test_json_body_must_be_object() {
        assert!(FormData::from_json(json!(["a"])).is_err());
    }

    #[test]
    fn test_int_rejects_garbage() {
        let mut form = FormData::default();
        form.push("position", "first".to_string());

        match form.int("position", "Position must be number") {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Position must be number"),
            other => panic!("Expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_required_int_missing() {
        let form = FormData::default();
        assert!(form.required_int("categoryId", "Category ID must be number").is_err());
    }

    #[test]
    fn test_number_rejects_non_finite() {
        let mut form = FormData::default();
        form.push("price", "NaN".to_string());
        assert!(form.number("price", "Price must be number").is_err());
    }

    #[test]
    fn test_list_from_bracket_fields() {
        let mut form = FormData::default();
        form.push("phoneNumbers[]", "+994 12 000".to_string());
        form.push("phoneNumbers[]", "+994 50 111".to_string());

        assert_eq!(
            form.list("phoneNumbers"),
            Some(vec!["+994 12 000".to_string(), "+994 50 111".to_string()])
        );
    }

    #[test]
    fn test_list_from_json_string() {
        let mut form = FormData::default();
        form.push("ingridientsAZ", r#"["duz","istiot"]"#.to_string());

        assert_eq!(
            form.list("ingridientsAZ"),
            Some(vec!["duz".to_string(), "istiot".to_string()])
        );
    }

    #[test]
    fn test_boolean_values() {
        let mut form = FormData::default();
        form.push("a", "1".to_string());
        form.push("b", "off".to_string());
        form.push("c", "maybe".to_string());
        form.push("e", " ".to_string());

        assert_eq!(form.boolean("a").unwrap(), Some(true));
        assert_eq!(form.boolean("b").unwrap(), Some(false));
        assert!(form.boolean("c").is_err());
        assert_eq!(form.boolean("d").unwrap(), None);
        assert_eq!(form.boolean("e").unwrap(), None);
    }
}
