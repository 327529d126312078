pub use super::course::Entity as Course;
pub use super::enrollment::Entity as Enrollment;
pub use super::instructor::Entity as Instructor;
pub use super::student::Entity as Student;
pub use super::user::Entity as User;
