// src/gui/components/mod.rs
pub mod results_table;
pub mod search_form;
pub mod toast;
