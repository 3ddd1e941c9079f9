use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Default, Display, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
pub enum ZifAppErrorType {
  #[default]
  Unknown,

  NetworkError,
  HttpStatus(u16),
  ParseError,
  InternalClientError,
  Cancelled,
}

#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct ZifAppError {
  pub context: String,
  pub error_type: ZifAppErrorType,
  pub description: String,
}

pub type ZifAppResult<T> = Result<T, ZifAppError>;

impl ZifAppError {
  pub fn status(status: u16, status_text: &str) -> Self {
    Self {
      context: "HTTP status".into(),
      error_type: ZifAppErrorType::HttpStatus(status),
      description: status_text.to_string(),
    }
  }
}

impl std::error::Error for ZifAppError {}

impl core::fmt::Debug for ZifAppError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("debug ZifAppError")
      .field("context", &self.context)
      .field("error_type", &self.error_type)
      .field("description", &self.description)
      .finish()
  }
}

impl core::fmt::Display for ZifAppError {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    match &self.error_type {
      ZifAppErrorType::HttpStatus(status) => {
        write!(f, "{{\"error_type\":{{\"{}\": {}}}}}", &self.error_type, status)
      }
      _ => {
        write!(f, "{{\"error_type\":\"{}\"}}", &self.error_type)
      }
    }
  }
}

impl From<ZifAppErrorType> for ZifAppError {
  fn from(error_type: ZifAppErrorType) -> Self {
    ZifAppError {
      context: "ZifAppErrorType error".into(),
      error_type,
      description: "".to_string(),
    }
  }
}

impl From<serde_json::error::Error> for ZifAppError {
  fn from(value: serde_json::error::Error) -> Self {
    Self {
      context: "Serde JSON error".into(),
      error_type: ZifAppErrorType::ParseError,
      description: format!("{:#?}", value),
    }
  }
}

impl From<web_sys::wasm_bindgen::JsValue> for ZifAppError {
  fn from(value: web_sys::wasm_bindgen::JsValue) -> Self {
    Self {
      context: "JsValue error".into(),
      error_type: ZifAppErrorType::InternalClientError,
      description: format!("{:#?}", value),
    }
  }
}

#[cfg(not(feature = "ssr"))]
impl From<gloo_net::Error> for ZifAppError {
  fn from(value: gloo_net::Error) -> Self {
    let error_type = match &value {
      gloo_net::Error::JsError(e) if e.name == "AbortError" => ZifAppErrorType::Cancelled,
      gloo_net::Error::SerdeError(_) => ZifAppErrorType::ParseError,
      _ => ZifAppErrorType::NetworkError,
    };
    Self {
      context: "Gloo error".into(),
      error_type,
      description: format!("{:#?}", value),
    }
  }
}
