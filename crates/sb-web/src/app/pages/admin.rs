use dioxus::prelude::*;
use sb_types::bank::{Account, Customer, Transaction};

use crate::app::api;
use crate::app::guard::Guard;
use crate::components::{DataTable, Guarded, Shell, StatCard};

#[component]
pub fn AdminPage() -> Element {
    rsx! {
        Guarded { guard: Guard::Admin, AdminBody {} }
    }
}

/// Bank-wide overview, admin only.
#[component]
fn AdminBody() -> Element {
    let customers = use_resource(move || async move { api::customers::list_customers().await });
    let accounts = use_resource(move || async move { api::accounts::list_accounts().await });
    let transactions =
        use_resource(move || async move { api::transactions::list_transactions().await });

    let customer_list: Vec<Customer> = match &*customers.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let account_list: Vec<Account> = match &*accounts.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let transaction_list: Vec<Transaction> = match &*transactions.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    let total_balance: f64 = account_list.iter().map(|account| account.amount).sum();

    rsx! {
        Shell {
            h1 { class: "text-2xl font-bold mb-6", "Admin overview" }

            div { class: "grid grid-cols-1 md:grid-cols-4 gap-4 mb-8",
                StatCard { title: "Customers", value: "{customer_list.len()}" }
                StatCard { title: "Accounts", value: "{account_list.len()}" }
                StatCard { title: "Holdings", value: format!("₹{:.2}", total_balance) }
                StatCard { title: "Transactions", value: "{transaction_list.len()}" }
            }

            h2 { class: "text-lg font-semibold mb-2", "Customers" }
            if let Some(Err(err)) = &*customers.read() {
                div { class: "alert alert-error", span { "Could not load customers: {err}" } }
            } else if customer_list.is_empty() {
                p { class: "text-base-content/60", "No customers onboarded yet." }
            } else {
                DataTable {
                    headers: vec!["Name", "Email", "Phone", "Aadhar", "Status"],
                    for customer in customer_list {
                        tr {
                            td { "{customer.name}" }
                            td { "{customer.email}" }
                            td { "{customer.phone_number}" }
                            td { "{customer.aadhar_number}" }
                            td { "{customer.status}" }
                        }
                    }
                }
            }
        }
    }
}
