pub mod amount;
pub mod input;
pub mod status;
pub mod validation;
