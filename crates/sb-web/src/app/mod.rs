pub mod api;
pub mod auth;
pub mod components;
pub mod guard;
pub mod logging;
pub mod nav;
pub mod pages;
pub mod routes;
pub mod session;
pub mod storage;
