pub mod project;
pub mod project_file;
