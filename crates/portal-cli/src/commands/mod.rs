pub mod dispatch;
pub mod login;
pub mod open;
pub mod outer;
pub mod register;
pub mod routes;
pub mod schema;
pub mod session;
pub mod shared;
pub mod student;
pub mod teacher;
