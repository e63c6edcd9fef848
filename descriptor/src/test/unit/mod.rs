pub mod analyze;
pub mod descriptor;
