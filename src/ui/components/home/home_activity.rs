use crate::{
  feed::{FeedProps, Post, PostsFeed},
  ui::components::common::{nav::NavBar, search_input::SearchInput},
};
use leptos::prelude::*;

/// Landing page. Loads the node's popular posts once per mount.
///
/// The posts are kept in component state but not rendered yet; only the
/// navigation bar and the search box are drawn.
#[component]
pub fn HomeActivity(#[prop(optional)] posts: Option<Vec<Post>>) -> impl IntoView {
  let feed = RwSignal::new(PostsFeed::new(FeedProps { posts }));

  // effects only run in the browser, after the first render
  Effect::new(move |_| {
    #[cfg(not(feature = "ssr"))]
    {
      use crate::{
        client::{ZifApi, ZifClient},
        errors::ZifAppError,
      };
      use leptos::logging::warn;
      use send_wrapper::SendWrapper;
      use web_sys::AbortController;

      let abort_controller = match AbortController::new() {
        Ok(a) => Some(a),
        Err(e) => {
          warn!("request will not be abortable: {}", ZifAppError::from(e));
          None
        }
      };
      let abort_signal = abort_controller.as_ref().map(|a| a.signal());
      let abort_controller = SendWrapper::new(abort_controller);

      let request = feed.try_update(move |f| {
        f.on_activate(move || {
          if let Some(abort_controller) = abort_controller.take() {
            abort_controller.abort()
          }
        })
      });

      if let Some(request) = request {
        leptos::task::spawn_local(async move {
          let result = ZifClient.popular_posts(&request, abort_signal.as_ref()).await;
          feed.try_update(|f| f.on_resolve(request.id, result));
        });
      }
    }
  });

  on_cleanup(move || {
    feed.try_update(|f| f.on_deactivate());
  });

  view! {
    <div>
      <NavBar />
      <SearchInput id="search" placeholder="Search" />
    </div>
  }
}
