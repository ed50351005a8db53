pub mod banner;
pub mod nav_bar;
pub mod page_checklist;
