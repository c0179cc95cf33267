pub mod rank;
pub mod returns;
