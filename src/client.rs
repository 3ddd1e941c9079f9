use crate::{
  config::{JSON_CONTENT_TYPE, ZIF_POPULAR_PAGE},
  errors::{ZifAppError, ZifAppResult},
  feed::{Post, RequestId},
  host::{get_host, get_https, popular_url},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use web_sys::AbortSignal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpType {
  Get,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FetchRequest {
  pub id: RequestId,
  pub method: HttpType,
  pub url: String,
  pub headers: Vec<(&'static str, &'static str)>,
}

impl FetchRequest {
  pub fn get(id: RequestId, url: String) -> Self {
    Self {
      id,
      method: HttpType::Get,
      url,
      headers: vec![("Accept", JSON_CONTENT_TYPE), ("Content-Type", JSON_CONTENT_TYPE)],
    }
  }

  pub fn popular(id: RequestId) -> Self {
    Self::get(id, build_route(ZIF_POPULAR_PAGE))
  }
}

fn build_route(page: u32) -> String {
  popular_url(get_https(), &get_host(), page)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopularPostsResponse {
  pub value: Vec<Post>,
}

pub struct ZifClient;

pub trait Fetch {
  async fn make_request<Response>(&self, request: &FetchRequest, abort_signal: Option<&AbortSignal>) -> ZifAppResult<Response>
  where
    Response: DeserializeOwned + 'static;
}

pub trait ZifApi: Fetch {
  async fn popular_posts(&self, request: &FetchRequest, abort_signal: Option<&AbortSignal>) -> ZifAppResult<Vec<Post>> {
    self
      .make_request::<PopularPostsResponse>(request, abort_signal)
      .await
      .map(|r| r.value)
  }
}

pub fn check_status(status: u16, status_text: &str) -> ZifAppResult<()> {
  if (200..300).contains(&status) {
    Ok(())
  } else {
    Err(ZifAppError::status(status, status_text))
  }
}

pub fn decode_body<Response: DeserializeOwned>(text: &str) -> ZifAppResult<Response> {
  serde_json::from_str::<Response>(text).map_err(Into::into)
}

#[cfg(not(feature = "ssr"))]
mod client {

  use super::*;
  use gloo_net::http;
  use leptos::logging::log;

  impl ZifApi for ZifClient {}

  impl Fetch for ZifClient {
    async fn make_request<Response>(&self, request: &FetchRequest, abort_signal: Option<&AbortSignal>) -> ZifAppResult<Response>
    where
      Response: DeserializeOwned + 'static,
    {
      log!("{:?} {}", request.method, request.url);

      let builder = match request.method {
        HttpType::Get => http::Request::get(&request.url),
      };

      let r = request
        .headers
        .iter()
        .fold(builder, |b, (name, value)| b.header(name, value))
        .abort_signal(abort_signal)
        .send()
        .await?;

      check_status(r.status(), &r.status_text())?;

      let t = r.text().await?;
      decode_body(&t)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::ZifAppErrorType;
  use serde_json::json;

  fn decode(text: &str) -> ZifAppResult<Vec<Post>> {
    decode_body::<PopularPostsResponse>(text).map(|r| r.value)
  }

  /// Answers every request with a fixed status and body.
  struct CannedClient {
    status: u16,
    body: &'static str,
  }

  impl Fetch for CannedClient {
    async fn make_request<Response>(&self, _request: &FetchRequest, _abort_signal: Option<&AbortSignal>) -> ZifAppResult<Response>
    where
      Response: DeserializeOwned + 'static,
    {
      check_status(self.status, "canned")?;
      decode_body(self.body)
    }
  }

  impl ZifApi for CannedClient {}

  fn popular_posts_from(client: CannedClient) -> ZifAppResult<Vec<Post>> {
    use std::{
      future::Future,
      task::{Context, Poll, Waker},
    };

    let request = FetchRequest::get(RequestId::default(), "http://127.0.0.1:8080/self/popular/0/".into());
    let mut fut = std::pin::pin!(client.popular_posts(&request, None));
    match fut.as_mut().poll(&mut Context::from_waker(Waker::noop())) {
      Poll::Ready(result) => result,
      Poll::Pending => panic!("canned client never suspends"),
    }
  }

  #[test]
  fn success_statuses_pass() {
    assert!(check_status(200, "OK").is_ok());
    assert!(check_status(204, "No Content").is_ok());
  }

  #[test]
  fn other_statuses_fail() {
    for status in [101u16, 304, 404, 500] {
      let e = check_status(status, "nope").unwrap_err();
      assert_eq!(e.error_type, ZifAppErrorType::HttpStatus(status));
    }
  }

  #[test]
  fn decodes_value_envelope() {
    let posts = decode(r#"{"value":[{"Title":"a","Seeders":3},{"Title":"b"}],"status":"ok"}"#).unwrap();
    assert_eq!(posts, vec![Post(json!({"Title":"a","Seeders":3})), Post(json!({"Title":"b"}))]);
  }

  #[test]
  fn malformed_bodies_are_parse_errors() {
    for body in ["", "not json", r#"{"value":null}"#, r#"{"posts":[]}"#] {
      let e = decode(body).unwrap_err();
      assert_eq!(e.error_type, ZifAppErrorType::ParseError, "body {body:?}");
    }
  }

  #[test]
  fn popular_posts_unwraps_value() {
    let posts = popular_posts_from(CannedClient { status: 200, body: r#"{"value":[{"Title":"a"},{"Title":"b"}]}"# }).unwrap();
    assert_eq!(posts, vec![Post(json!({"Title":"a"})), Post(json!({"Title":"b"}))]);
  }

  #[test]
  fn popular_posts_surfaces_status_and_parse_failures() {
    let e = popular_posts_from(CannedClient { status: 502, body: "" }).unwrap_err();
    assert_eq!(e.error_type, ZifAppErrorType::HttpStatus(502));

    let e = popular_posts_from(CannedClient { status: 200, body: "" }).unwrap_err();
    assert_eq!(e.error_type, ZifAppErrorType::ParseError);
  }

  #[test]
  fn popular_request_is_a_json_get() {
    let request = FetchRequest::get(RequestId::default(), "http://127.0.0.1:8080/self/popular/0/".into());
    assert_eq!(request.method, HttpType::Get);
    assert_eq!(request.url, "http://127.0.0.1:8080/self/popular/0/");
    assert_eq!(request.headers, vec![("Accept", "application/json"), ("Content-Type", "application/json")]);
  }
}
