use leptos::prelude::*;
use strum_macros::Display;

/// Names match the Material Icons ligatures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum IconType {
  Search,
  Whatshot,
}

#[component]
pub fn Icon(#[prop(into)] icon: Signal<IconType>) -> impl IntoView {
  view! { <span class="material-icons">{move || icon.get().to_string()}</span> }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ligature_names() {
    assert_eq!(IconType::Search.to_string(), "search");
    assert_eq!(IconType::Whatshot.to_string(), "whatshot");
  }

  #[test]
  fn renders_ligature_text() {
    let html = Owner::new().with(|| view! { <Icon icon={IconType::Search} /> }.to_html());
    assert!(html.contains("material-icons"));
    assert!(html.contains("search"));
  }
}
