pub mod cards;
pub mod forms;
pub mod navbar;
pub mod stubs;
