pub mod script;
pub mod simulator;
