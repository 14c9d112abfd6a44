mod category_repo;
mod task_repo;

pub use category_repo::CategoryRepo;
pub use task_repo::TaskRepo;
