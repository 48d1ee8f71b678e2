use serde_json::Value;

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum HttpMethod {
    #[default]
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
        }
    }

    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::GET => reqwest::Method::GET,
            HttpMethod::POST => reqwest::Method::POST,
            HttpMethod::PUT => reqwest::Method::PUT,
            HttpMethod::PATCH => reqwest::Method::PATCH,
            HttpMethod::DELETE => reqwest::Method::DELETE,
        }
    }
}

/// Body of an outgoing call
#[derive(Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Structured body, sent as JSON text
    Json(Value),
    /// Multipart form, passed through untouched
    Form(reqwest::multipart::Form),
}

/// Decoded backend response, chosen by the declared content type
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(Value),
    Binary(Vec<u8>),
}

impl ApiResponse {
    /// Truthiness of the conventional `success` field
    pub fn is_success(&self) -> bool {
        match self {
            ApiResponse::Json(value) => value.get("success").is_some_and(is_truthy),
            ApiResponse::Binary(_) => false,
        }
    }

    /// The conventional `error` field, if the payload is JSON and carries one
    pub fn error_message(&self) -> Option<String> {
        match self {
            ApiResponse::Json(value) => match value.get("error")? {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            },
            ApiResponse::Binary(_) => None,
        }
    }
}

/// Loose truthiness: false, null, 0, "" are false; everything else is true
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Notification styling
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MessageKind {
    Info,
    Error,
}
