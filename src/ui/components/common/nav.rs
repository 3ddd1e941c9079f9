use crate::ui::components::common::icon::{Icon, IconType::Whatshot};
use leptos::prelude::*;

#[component]
pub fn NavBar() -> impl IntoView {
  view! {
    <nav class="flex flex-row py-0 navbar">
      <div class="flex">
        <ul class="flex-nowrap items-center menu menu-horizontal">
          <li>
            <a href="/" class="select-none text-xl whitespace-nowrap">
              "Zif"
            </a>
          </li>
          <li>
            <a href="/" title="Popular">
              <Icon icon={Whatshot} />
            </a>
          </li>
        </ul>
      </div>
    </nav>
  }
}
