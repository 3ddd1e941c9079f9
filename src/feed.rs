//! Headless state behind the popular posts feed.
//!
//! The view drives this from its mount and unmount hooks, but nothing in here
//! depends on a rendering environment.

use crate::{client::FetchRequest, errors::ZifAppResult};
use leptos::logging::{error, log};
use serde::{Deserialize, Serialize};

/// A post as served by the node. Its contents are passed through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Post(pub serde_json::Value);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// Handle to an outstanding request. Cancelling runs the abort hook once;
/// dropping the token leaves the request alone.
pub struct CancelToken {
  id: RequestId,
  abort: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl CancelToken {
  pub fn new(id: RequestId, abort: impl FnOnce() + Send + Sync + 'static) -> Self {
    Self { id, abort: Some(Box::new(abort)) }
  }

  pub fn id(&self) -> RequestId {
    self.id
  }

  pub fn cancel(mut self) {
    if let Some(abort) = self.abort.take() {
      abort()
    }
  }
}

impl core::fmt::Debug for CancelToken {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("CancelToken").field("id", &self.id).field("armed", &self.abort.is_some()).finish()
  }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedProps {
  pub posts: Option<Vec<Post>>,
}

#[derive(Debug, Default)]
pub struct PostsFeed {
  posts: Vec<Post>,
  pending: Option<CancelToken>,
  next_id: u64,
}

impl PostsFeed {
  pub fn new(props: FeedProps) -> Self {
    Self {
      posts: props.posts.unwrap_or_default(),
      ..Default::default()
    }
  }

  pub fn posts(&self) -> &[Post] {
    &self.posts
  }

  pub fn is_pending(&self) -> bool {
    self.pending.is_some()
  }

  /// Mount. Registers `abort` as the way to cancel the request and returns
  /// the request the caller must issue.
  pub fn on_activate(&mut self, abort: impl FnOnce() + Send + Sync + 'static) -> FetchRequest {
    if let Some(previous) = self.pending.take() {
      log!("superseding request {:?}", previous.id());
      previous.cancel();
    }

    let id = RequestId(self.next_id);
    self.next_id += 1;
    self.pending = Some(CancelToken::new(id, abort));

    FetchRequest::popular(id)
  }

  /// Completion of request `id`. Returns whether the outcome was applied;
  /// results for cancelled or superseded requests are dropped.
  pub fn on_resolve(&mut self, id: RequestId, result: ZifAppResult<Vec<Post>>) -> bool {
    match self.pending.as_ref() {
      Some(token) if token.id() == id => {}
      _ => {
        log!("dropping result of stale request {:?}", id);
        return false;
      }
    }
    // resolved, so there is nothing left to abort
    self.pending = None;

    match result {
      Ok(posts) => self.posts = posts,
      Err(e) => error!("{}\n{:#?}", e, e),
    }
    true
  }

  /// Unmount. Returns whether a pending request was cancelled.
  pub fn on_deactivate(&mut self) -> bool {
    match self.pending.take() {
      Some(token) => {
        token.cancel();
        true
      }
      None => false,
    }
  }
}
