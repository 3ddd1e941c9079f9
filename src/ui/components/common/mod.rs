pub mod icon;
pub mod nav;
pub mod search_input;
