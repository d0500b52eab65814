pub mod context;
pub mod hooks;
pub mod resolver;
