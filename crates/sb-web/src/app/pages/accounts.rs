use dioxus::prelude::*;
use sb_types::bank::Account;
use sb_types::validation::{format_errors, AccountInput};

use crate::app::api;
use crate::app::guard::Guard;
use crate::components::{DataTable, Guarded, Modal, Shell, Toast, ToastMessage};

#[component]
pub fn AccountsPage() -> Element {
    rsx! {
        Guarded { guard: Guard::Authenticated, AccountsBody {} }
    }
}

#[component]
fn AccountsBody() -> Element {
    let mut accounts = use_resource(move || async move { api::accounts::list_accounts().await });

    let mut search = use_signal(String::new);
    let mut toast = use_signal(|| None::<ToastMessage>);
    let mut modal_open = use_signal(|| false);
    // Set while editing an existing account; None means creating a new one.
    let mut editing = use_signal(|| None::<Account>);
    let mut form_error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let mut account_number = use_signal(String::new);
    let mut aadhar_number = use_signal(String::new);
    let mut ifsc_code = use_signal(String::new);
    let mut phone_number_linked = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut bank_name = use_signal(String::new);
    let mut name_on_account = use_signal(String::new);

    let mut open_create = move || {
        editing.set(None);
        account_number.set(String::new());
        aadhar_number.set(String::new());
        ifsc_code.set(String::new());
        phone_number_linked.set(String::new());
        amount.set(String::new());
        bank_name.set(String::new());
        name_on_account.set(String::new());
        form_error.set(None);
        modal_open.set(true);
    };

    let mut open_edit = move |account: Account| {
        account_number.set(account.account_number.clone());
        aadhar_number.set(account.aadhar_number.clone());
        ifsc_code.set(account.ifsc_code.clone());
        phone_number_linked.set(account.phone_number_linked.clone());
        amount.set(account.amount.to_string());
        bank_name.set(account.bank_name.clone());
        name_on_account.set(account.name_on_account.clone());
        editing.set(Some(account));
        form_error.set(None);
        modal_open.set(true);
    };

    let on_save = move |_| {
        if saving() {
            return;
        }
        form_error.set(None);

        let number_val = account_number();
        let aadhar_val = aadhar_number();
        let ifsc_val = ifsc_code();
        let phone_val = phone_number_linked();
        let amount_val = amount();
        let bank_val = bank_name();
        let holder_val = name_on_account();

        let input = AccountInput {
            account_number: &number_val,
            aadhar_number: &aadhar_val,
            ifsc_code: &ifsc_val,
            phone_number_linked: &phone_val,
            amount: &amount_val,
            bank_name: &bank_val,
            name_on_account: &holder_val,
        };
        let errors = input.validate();
        if !errors.is_empty() {
            form_error.set(Some(format_errors(&errors)));
            return;
        }

        let previous = editing();
        let payload = Account {
            account_id: previous.as_ref().and_then(|a| a.account_id.clone()),
            customer_id: previous.as_ref().and_then(|a| a.customer_id.clone()),
            account_number: number_val,
            aadhar_number: aadhar_val,
            ifsc_code: ifsc_val,
            phone_number_linked: phone_val,
            amount: amount_val.trim().parse().unwrap_or(0.0),
            bank_name: bank_val,
            name_on_account: holder_val,
            status: previous
                .as_ref()
                .map(|a| a.status.clone())
                .unwrap_or_else(|| "Active".to_string()),
        };

        saving.set(true);

        spawn(async move {
            // Updates are keyed by the account number the record had before
            // the edit, not the possibly changed form value.
            let result = match previous.as_ref() {
                Some(before) => api::accounts::update_account(&before.account_number, &payload)
                    .await
                    .map(|_| "Account updated".to_string()),
                None => api::accounts::create_account(&payload)
                    .await
                    .map(|_| "Account created".to_string()),
            };

            match result {
                Ok(message) => {
                    toast.set(Some(ToastMessage::success(message)));
                    modal_open.set(false);
                    accounts.restart();
                }
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                }
            }

            saving.set(false);
        });
    };

    let mut on_delete = move |number: String| {
        spawn(async move {
            match api::accounts::delete_account(&number).await {
                Ok(()) => {
                    toast.set(Some(ToastMessage::success("Account deleted")));
                    accounts.restart();
                }
                Err(err) => {
                    toast.set(Some(ToastMessage::error(err.to_string())));
                }
            }
        });
    };

    let filter = search().to_lowercase();
    let visible: Vec<Account> = match &*accounts.read() {
        Some(Ok(list)) => list
            .iter()
            .filter(|account| {
                filter.is_empty()
                    || account.account_number.contains(&filter)
                    || account.name_on_account.to_lowercase().contains(&filter)
                    || account.bank_name.to_lowercase().contains(&filter)
            })
            .cloned()
            .collect(),
        _ => Vec::new(),
    };

    rsx! {
        Shell {
            div { class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold", "Accounts" }
                button { class: "btn btn-primary", onclick: move |_| open_create(), "Add account" }
            }

            input {
                r#type: "search",
                placeholder: "Search by number, holder or bank",
                class: "input input-bordered w-full max-w-md mb-4",
                value: "{search}",
                oninput: move |evt| search.set(evt.value()),
            }

            if let Some(Err(err)) = &*accounts.read() {
                div { class: "alert alert-error", span { "Could not load accounts: {err}" } }
            } else if visible.is_empty() {
                p { class: "text-base-content/60", "No accounts found." }
            } else {
                DataTable {
                    headers: vec!["Number", "Holder", "Bank", "IFSC", "Balance", "Status", ""],
                    for account in visible {
                        tr {
                            td { "{account.account_number}" }
                            td { "{account.name_on_account}" }
                            td { "{account.bank_name}" }
                            td { "{account.ifsc_code}" }
                            td { {format!("₹{:.2}", account.amount)} }
                            td { "{account.status}" }
                            td { class: "flex gap-1",
                                button {
                                    class: "btn btn-xs",
                                    onclick: {
                                        let account = account.clone();
                                        move |_| open_edit(account.clone())
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-xs btn-error btn-outline",
                                    onclick: {
                                        let number = account.account_number.clone();
                                        move |_| on_delete(number.clone())
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            Modal {
                open: modal_open(),
                on_close: move |_| modal_open.set(false),
                title: if editing().is_some() { "Edit account" } else { "Add account" },
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
                        placeholder: "Account number (10-20 characters)",
                        value: "{account_number}",
                        oninput: move |evt| account_number.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Name on account",
                        value: "{name_on_account}",
                        oninput: move |evt| name_on_account.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Aadhar number (12 digits)",
                        value: "{aadhar_number}",
                        oninput: move |evt| aadhar_number.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "IFSC code",
                        value: "{ifsc_code}",
                        oninput: move |evt| ifsc_code.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Linked phone number",
                        value: "{phone_number_linked}",
                        oninput: move |evt| phone_number_linked.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Bank name",
                        value: "{bank_name}",
                        oninput: move |evt| bank_name.set(evt.value()),
                    }
                    input {
                        r#type: "number",
                        class: "input input-bordered w-full",
                        placeholder: "Opening balance",
                        value: "{amount}",
                        oninput: move |evt| amount.set(evt.value()),
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
