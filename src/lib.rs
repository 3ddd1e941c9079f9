pub mod client;
pub mod config;
pub mod errors;
pub mod feed;
pub mod host;
pub mod ui;

use crate::ui::components::home::home_activity::HomeActivity;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, StaticSegment};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
  console_error_panic_hook::set_once();
  leptos::mount::hydrate_body(App);
}

pub fn html_template(options: LeptosOptions) -> impl IntoView {
  view! {
    <!DOCTYPE html>
    <html lang="en">
      <head>
        <meta charset="utf-8" />
        <meta name="viewport" content="width=device-width, initial-scale=1" />
        <AutoReload options={options.clone()} />
        <HydrationScripts options />
        <MetaTags />
      </head>
      <body>
        <App />
      </body>
    </html>
  }
}

#[component]
pub fn App() -> impl IntoView {
  provide_meta_context();

  view! {
    <Stylesheet id="leptos" href="/pkg/zif-ui.css" />
    <Link rel="stylesheet" href="https://fonts.googleapis.com/icon?family=Material+Icons" />
    <Link rel="shortcut icon" type_="image/ico" href="/favicon.ico" />
    <Title text="Zif" />
    <Router>
      <Routes fallback={|| view! { <NotFound /> }}>
        <Route path={StaticSegment("")} view={move || view! { <HomeActivity /> }} />
      </Routes>
    </Router>
  }
}

#[component]
fn NotFound() -> impl IntoView {
  #[cfg(feature = "ssr")]
  {
    let resp = expect_context::<leptos_actix::ResponseOptions>();
    resp.set_status(actix_web::http::StatusCode::NOT_FOUND);
  }
  view! { <h1>"Not Found"</h1> }
}
