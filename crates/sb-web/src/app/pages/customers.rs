use dioxus::prelude::*;
use sb_types::bank::Customer;
use sb_types::validation::{format_errors, CustomerInput};

use crate::app::api;
use crate::app::guard::Guard;
use crate::components::{DataTable, Guarded, Modal, Shell, Toast, ToastMessage};

#[component]
pub fn CustomersPage() -> Element {
    rsx! {
        Guarded { guard: Guard::CustomerPage, CustomersBody {} }
    }
}

#[component]
fn CustomersBody() -> Element {
    let mut customers = use_resource(move || async move { api::customers::list_customers().await });

    let mut search = use_signal(String::new);
    let mut toast = use_signal(|| None::<ToastMessage>);
    let mut modal_open = use_signal(|| false);
    // Set while editing an existing customer; None means onboarding a new one.
    let mut editing = use_signal(|| None::<Customer>);
    let mut form_error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let mut name = use_signal(String::new);
    let mut phone_number = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut aadhar_number = use_signal(String::new);
    let mut dob = use_signal(String::new);

    let mut open_create = move || {
        editing.set(None);
        name.set(String::new());
        phone_number.set(String::new());
        email.set(String::new());
        address.set(String::new());
        aadhar_number.set(String::new());
        dob.set(String::new());
        form_error.set(None);
        modal_open.set(true);
    };

    let mut open_edit = move |customer: Customer| {
        name.set(customer.name.clone());
        phone_number.set(customer.phone_number.clone());
        email.set(customer.email.clone());
        address.set(customer.address.clone());
        aadhar_number.set(customer.aadhar_number.clone());
        dob.set(customer.dob.clone());
        editing.set(Some(customer));
        form_error.set(None);
        modal_open.set(true);
    };

    let on_save = move |_| {
        if saving() {
            return;
        }
        form_error.set(None);

        let name_val = name();
        let phone_val = phone_number();
        let email_val = email();
        let address_val = address();
        let aadhar_val = aadhar_number();
        let dob_val = dob();

        let input = CustomerInput {
            name: &name_val,
            phone_number: &phone_val,
            email: &email_val,
            address: &address_val,
            aadhar_number: &aadhar_val,
            dob: &dob_val,
        };
        let errors = input.validate();
        if !errors.is_empty() {
            form_error.set(Some(format_errors(&errors)));
            return;
        }

        let previous = editing();
        let payload = Customer {
            customer_id: previous.as_ref().and_then(|c| c.customer_id.clone()),
            name: name_val,
            phone_number: phone_val,
            email: email_val,
            address: address_val,
            aadhar_number: aadhar_val,
            dob: dob_val,
            status: previous
                .as_ref()
                .map(|c| c.status.clone())
                .unwrap_or_else(|| "Active".to_string()),
        };

        saving.set(true);

        spawn(async move {
            let result = match payload.customer_id.clone() {
                Some(customer_id) => api::customers::update_customer(&customer_id, &payload)
                    .await
                    .map(|_| "Customer updated".to_string()),
                None => api::customers::onboard_customer(&payload)
                    .await
                    .map(|_| "Customer onboarded".to_string()),
            };

            match result {
                Ok(message) => {
                    toast.set(Some(ToastMessage::success(message)));
                    modal_open.set(false);
                    customers.restart();
                }
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                }
            }

            saving.set(false);
        });
    };

    let mut on_delete = move |aadhar: String| {
        spawn(async move {
            match api::customers::delete_customer(&aadhar).await {
                Ok(()) => {
                    toast.set(Some(ToastMessage::success("Customer deleted")));
                    customers.restart();
                }
                Err(err) => {
                    toast.set(Some(ToastMessage::error(err.to_string())));
                }
            }
        });
    };

    let filter = search().to_lowercase();
    let visible: Vec<Customer> = match &*customers.read() {
        Some(Ok(list)) => list
            .iter()
            .filter(|customer| {
                filter.is_empty()
                    || customer.name.to_lowercase().contains(&filter)
                    || customer.email.to_lowercase().contains(&filter)
                    || customer.aadhar_number.contains(&filter)
            })
            .cloned()
            .collect(),
        _ => Vec::new(),
    };

    rsx! {
        Shell {
            div { class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold", "Customers" }
                button { class: "btn btn-primary", onclick: move |_| open_create(), "Onboard customer" }
            }

            input {
                r#type: "search",
                placeholder: "Search by name, email or aadhar",
                class: "input input-bordered w-full max-w-md mb-4",
                value: "{search}",
                oninput: move |evt| search.set(evt.value()),
            }

            if let Some(Err(err)) = &*customers.read() {
                div { class: "alert alert-error", span { "Could not load customers: {err}" } }
            } else if visible.is_empty() {
                p { class: "text-base-content/60", "No customers found." }
            } else {
                DataTable {
                    headers: vec!["Name", "Email", "Phone", "Aadhar", "DOB", "Status", ""],
                    for customer in visible {
                        tr {
                            td { "{customer.name}" }
                            td { "{customer.email}" }
                            td { "{customer.phone_number}" }
                            td { "{customer.aadhar_number}" }
                            td { "{customer.dob}" }
                            td { "{customer.status}" }
                            td { class: "flex gap-1",
                                button {
                                    class: "btn btn-xs",
                                    onclick: {
                                        let customer = customer.clone();
                                        move |_| open_edit(customer.clone())
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-xs btn-error btn-outline",
                                    onclick: {
                                        let aadhar = customer.aadhar_number.clone();
                                        move |_| on_delete(aadhar.clone())
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
                title: if editing().is_some() { "Edit customer" } else { "Onboard customer" },
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
                        placeholder: "Full name",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Phone number (10 digits)",
                        value: "{phone_number}",
                        oninput: move |evt| phone_number.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Address",
                        value: "{address}",
                        oninput: move |evt| address.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Aadhar number (12 digits)",
                        value: "{aadhar_number}",
                        oninput: move |evt| aadhar_number.set(evt.value()),
                    }
                    input {
                        r#type: "date",
                        class: "input input-bordered w-full",
                        value: "{dob}",
                        oninput: move |evt| dob.set(evt.value()),
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
