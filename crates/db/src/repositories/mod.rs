pub mod project_file_repo;
pub mod project_repo;

pub use project_file_repo::ProjectFileRepo;
pub use project_repo::ProjectRepo;
