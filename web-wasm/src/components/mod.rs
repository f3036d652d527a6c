pub mod header;
pub mod file_input;
pub mod submit_button;
pub mod match_table;
