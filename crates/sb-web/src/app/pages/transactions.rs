use dioxus::prelude::*;
use sb_types::bank::Transaction;
use sb_types::validation::{format_errors, TransactionInput};

use crate::app::api;
use crate::app::guard::Guard;
use crate::components::{DataTable, Guarded, Modal, Shell, Toast, ToastMessage};

#[component]
pub fn TransactionsPage() -> Element {
    rsx! {
        Guarded { guard: Guard::Authenticated, TransactionsBody {} }
    }
}

#[component]
fn TransactionsBody() -> Element {
    let mut account_filter = use_signal(String::new);
    let mut transactions = use_resource(move || {
        let filter = account_filter().trim().to_string();
        async move {
            if filter.is_empty() {
                api::transactions::list_transactions().await
            } else {
                api::transactions::list_transactions_by_account(&filter).await
            }
        }
    });

    let mut toast = use_signal(|| None::<ToastMessage>);
    let mut modal_open = use_signal(|| false);
    let mut form_error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let mut sender = use_signal(String::new);
    let mut receiver = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut transaction_type = use_signal(|| "TRANSFER".to_string());
    let mut description = use_signal(String::new);
    let mut pin = use_signal(String::new);

    let mut open_create = move || {
        sender.set(String::new());
        receiver.set(String::new());
        amount.set(String::new());
        transaction_type.set("TRANSFER".to_string());
        description.set(String::new());
        pin.set(String::new());
        form_error.set(None);
        modal_open.set(true);
    };

    let on_save = move |_| {
        if saving() {
            return;
        }
        form_error.set(None);

        let sender_val = sender();
        let receiver_val = receiver();
        let amount_val = amount();
        let type_val = transaction_type();
        let pin_val = pin();

        let input = TransactionInput {
            sender_account_number: &sender_val,
            receiver_account_number: &receiver_val,
            amount: &amount_val,
            transaction_type: &type_val,
            pin: &pin_val,
        };
        let errors = input.validate();
        if !errors.is_empty() {
            form_error.set(Some(format_errors(&errors)));
            return;
        }

        let description_val = description();
        let payload = Transaction {
            transaction_id: None,
            sender_account_number: sender_val,
            receiver_account_number: receiver_val,
            amount: amount_val.trim().parse().unwrap_or(0.0),
            transaction_type: type_val,
            description: if description_val.trim().is_empty() {
                None
            } else {
                Some(description_val)
            },
            pin: pin_val,
            created_date: None,
        };

        saving.set(true);

        spawn(async move {
            match api::transactions::create_transaction(&payload).await {
                Ok(_) => {
                    toast.set(Some(ToastMessage::success("Transaction recorded")));
                    modal_open.set(false);
                    transactions.restart();
                }
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                }
            }

            saving.set(false);
        });
    };

    let listing: Vec<Transaction> = match &*transactions.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    rsx! {
        Shell {
            div { class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold", "Transactions" }
                button { class: "btn btn-primary", onclick: move |_| open_create(), "Record transaction" }
            }

            input {
                r#type: "search",
                placeholder: "Filter by account number",
                class: "input input-bordered w-full max-w-md mb-4",
                value: "{account_filter}",
                oninput: move |evt| account_filter.set(evt.value()),
            }

            if let Some(Err(err)) = &*transactions.read() {
                div { class: "alert alert-error", span { "Could not load transactions: {err}" } }
            } else if listing.is_empty() {
                p { class: "text-base-content/60", "No transactions found." }
            } else {
                DataTable {
                    headers: vec!["From", "To", "Type", "Amount", "Description", "Date"],
                    for tx in listing {
                        tr {
                            td { "{tx.sender_account_number}" }
                            td { "{tx.receiver_account_number}" }
                            td { "{tx.transaction_type}" }
                            td { {format!("₹{:.2}", tx.amount)} }
                            td { {tx.description.clone().unwrap_or_default()} }
                            td { {tx.created_date.clone().unwrap_or_default()} }
                        }
                    }
                }
            }

            Modal {
                open: modal_open(),
                on_close: move |_| modal_open.set(false),
                title: "Record transaction",
                actions: rsx! {
                    button {
                        class: "btn btn-primary",
                        disabled: saving(),
                        onclick: on_save,
                        if saving() { span { class: "loading loading-spinner" } }
                        span { "Save" }
                    }
                },
                div { class: "flex flex-col gap-3",
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Sender account number",
                        value: "{sender}",
                        oninput: move |evt| sender.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Receiver account number",
                        value: "{receiver}",
                        oninput: move |evt| receiver.set(evt.value()),
                    }
                    input {
                        r#type: "number",
                        class: "input input-bordered w-full",
                        placeholder: "Amount",
                        value: "{amount}",
                        oninput: move |evt| amount.set(evt.value()),
                    }
                    select {
                        class: "select select-bordered w-full",
                        value: "{transaction_type}",
                        onchange: move |evt| transaction_type.set(evt.value()),
                        option { value: "TRANSFER", "Transfer" }
                        option { value: "DEPOSIT", "Deposit" }
                        option { value: "WITHDRAWAL", "Withdrawal" }
                    }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Description (optional)",
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        class: "input input-bordered w-full",
                        placeholder: "PIN (4 digits)",
                        value: "{pin}",
                        oninput: move |evt| pin.set(evt.value()),
                    }
                    if let Some(error) = form_error() {
                        div { class: "alert alert-error", span { "{error}" } }
                    }
                },
            }

            Toast { message: toast }
        }
    }
}
