use dioxus::prelude::*;

use crate::pages::{
    AccountsPage, AdminPage, CustomersPage, DashboardPage, HomePage, LoginPage, NotFoundPage,
    SignupPage, TransactionsPage,
};

#[component]
pub fn AppRouter() -> Element {
    rsx! {
        Router::<Routes> {}
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Routes {
    #[route("/")]
    HomePage {},
    #[route("/login")]
    LoginPage {},
    #[route("/signup")]
    SignupPage {},
    #[route("/dashboard")]
    DashboardPage {},
    #[route("/admin")]
    AdminPage {},
    #[route("/customers")]
    CustomersPage {},
    #[route("/accounts")]
    AccountsPage {},
    #[route("/transactions")]
    TransactionsPage {},
    #[route("/:..route")]
    NotFoundPage { route: Vec<String> },
}
