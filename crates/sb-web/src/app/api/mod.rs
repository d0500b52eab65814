// REST client modules, one per backend resource.

pub mod accounts;
pub mod auth;
pub mod client;
pub mod customers;
pub mod transactions;
