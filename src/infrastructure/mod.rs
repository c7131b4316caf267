pub mod authorizers;
pub mod processors;
