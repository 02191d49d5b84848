pub mod course;
pub mod department;

pub use course::Course;
pub use department::{Department, UnknownDepartment};
