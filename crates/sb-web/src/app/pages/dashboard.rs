use dioxus::prelude::*;
use sb_types::bank::{Account, Transaction};

use crate::app::api;
use crate::app::auth::hooks::use_auth;
use crate::app::guard::Guard;
use crate::components::{DataTable, Guarded, Shell, StatCard};

#[component]
pub fn DashboardPage() -> Element {
    rsx! {
        Guarded { guard: Guard::Authenticated, DashboardBody {} }
    }
}

#[component]
fn DashboardBody() -> Element {
    let auth = use_auth();
    let accounts = use_resource(move || async move { api::accounts::list_accounts().await });
    let transactions =
        use_resource(move || async move { api::transactions::list_transactions().await });

    let greeting = auth
        .read()
        .session
        .as_ref()
        .map(|session| session.user().full_name.clone())
        .unwrap_or_default();

    let account_list: Vec<Account> = match &*accounts.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let transaction_list: Vec<Transaction> = match &*transactions.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    let total_balance: f64 = account_list.iter().map(|account| account.amount).sum();
    let recent: Vec<Transaction> = transaction_list.iter().take(5).cloned().collect();

    rsx! {
        Shell {
            h1 { class: "text-2xl font-bold mb-1", "Dashboard" }
            p { class: "text-base-content/60 mb-6", "Welcome back, {greeting}" }

            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4 mb-8",
                StatCard { title: "Accounts", value: "{account_list.len()}" }
                StatCard { title: "Total balance", value: format!("₹{:.2}", total_balance) }
                StatCard { title: "Transactions", value: "{transaction_list.len()}" }
            }

            h2 { class: "text-lg font-semibold mb-2", "Recent transactions" }
            if let Some(Err(err)) = &*transactions.read() {
                div { class: "alert alert-error", span { "Could not load transactions: {err}" } }
            } else if recent.is_empty() {
                p { class: "text-base-content/60", "No transactions yet." }
            } else {
                DataTable {
                    headers: vec!["From", "To", "Type", "Amount"],
                    for tx in recent {
                        tr {
                            td { "{tx.sender_account_number}" }
                            td { "{tx.receiver_account_number}" }
                            td { "{tx.transaction_type}" }
                            td { {format!("₹{:.2}", tx.amount)} }
                        }
                    }
                }
            }
        }
    }
}
