use crate::ui::components::common::icon::{Icon, IconType::Search};
use leptos::prelude::*;

#[component]
pub fn SearchInput(id: &'static str, placeholder: &'static str) -> impl IntoView {
  view! {
    <div class="outer">
      <div class="middle">
        <div class="searchBox inner">
          <div class="searchContainer">
            <span class="icon">
              <Icon icon={Search} />
            </span>
            <input type="search" id={id} placeholder={placeholder} />
          </div>
        </div>
      </div>
    </div>
  }
}
