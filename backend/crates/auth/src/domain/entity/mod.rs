pub mod principal;
pub mod student;
pub mod teacher;
