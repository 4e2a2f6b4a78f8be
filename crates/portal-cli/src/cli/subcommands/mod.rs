pub mod outer;
pub mod student;
pub mod teacher;

pub use outer::OuterCommands;
pub use student::StudentCommands;
pub use teacher::{LinkArgs, TeacherCommands};
