//! Generic descriptor-driven CRUD screen.
//!
//! DESIGN
//! ======
//! Every resource screen is this one component plus a static
//! `ResourceDescriptor`. Field kinds are a closed enum so the renderer
//! switches exhaustively; rows stay `serde_json::Value` and columns
//! resolve dotted key paths, which keeps the screen independent of
//! per-resource structs. All data flows through the authorized client —
//! this module is a consumer of the session core, not part of it.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use std::collections::HashMap;

use leptos::prelude::*;

use crate::auth::AuthError;
use crate::auth::claims::Role;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;

/// One choice in a static select field.
#[derive(Clone, Copy, Debug)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Closed set of form field kinds.
#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    TextArea,
    Select { options: &'static [SelectOption] },
    /// Reference to another resource; options are fetched from its
    /// endpoint and labeled by `label_key`.
    RelatedRef {
        endpoint: &'static str,
        label_key: &'static str,
    },
}

/// One form field of a resource.
#[derive(Clone, Copy, Debug)]
pub struct FieldDescriptor {
    /// Payload key.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Shown only to administrators when set.
    pub admin_only: bool,
    pub placeholder: &'static str,
    /// Initial form value for create.
    pub initial: &'static str,
}

/// One list column; `key` may be a dotted path into the row.
#[derive(Clone, Copy, Debug)]
pub struct ColumnDescriptor {
    pub key: &'static str,
    pub header: &'static str,
}

/// A complete CRUD resource screen description.
#[derive(Debug)]
pub struct ResourceDescriptor {
    /// Plural display name, e.g. `"Fields"`.
    pub name: &'static str,
    /// Collection endpoint, e.g. `/crops/fields/`.
    pub endpoint: &'static str,
    pub columns: &'static [ColumnDescriptor],
    pub form_fields: &'static [FieldDescriptor],
    pub can_create: bool,
}

/// Rows from a list response: either a bare array or DRF-style
/// `{"results": [...]}` pagination.
pub fn rows_from_response(body: &serde_json::Value) -> Vec<serde_json::Value> {
    match body {
        serde_json::Value::Array(rows) => rows.clone(),
        serde_json::Value::Object(map) => map
            .get("results")
            .and_then(serde_json::Value::as_array)
            .cloned()
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Cell text for `key` in `row`, resolving dotted paths.
pub fn display_cell(row: &serde_json::Value, key: &str) -> String {
    let mut value = row;
    for part in key.split('.') {
        match value.get(part) {
            Some(next) => value = next,
            None => return "N/A".to_owned(),
        }
    }
    match value {
        serde_json::Value::Null => "N/A".to_owned(),
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Number(number) => number.to_string(),
        serde_json::Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}

/// Empty form for a create dialog.
pub fn initial_form(fields: &[FieldDescriptor]) -> serde_json::Map<String, serde_json::Value> {
    fields
        .iter()
        .map(|field| {
            (
                field.name.to_owned(),
                serde_json::Value::String(field.initial.to_owned()),
            )
        })
        .collect()
}

/// Form values for an edit dialog, from an existing row.
///
/// A `thing_id` field missing from the row falls back to `row.thing.id`,
/// covering serializers that nest the related object on read.
pub fn form_from_row(
    fields: &[FieldDescriptor],
    row: &serde_json::Value,
) -> serde_json::Map<String, serde_json::Value> {
    fields
        .iter()
        .map(|field| {
            let value = row
                .get(field.name)
                .cloned()
                .or_else(|| {
                    field
                        .name
                        .strip_suffix("_id")
                        .and_then(|related| row.get(related)?.get("id").cloned())
                })
                .unwrap_or(serde_json::Value::Null);
            let text = match value {
                serde_json::Value::String(text) => text,
                serde_json::Value::Number(number) => number.to_string(),
                _ => String::new(),
            };
            (field.name.to_owned(), serde_json::Value::String(text))
        })
        .collect()
}

/// Labels of required fields that are still blank.
pub fn missing_required_labels(
    fields: &[FieldDescriptor],
    form: &serde_json::Map<String, serde_json::Value>,
) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|field| field.required)
        .filter(|field| {
            form.get(field.name)
                .and_then(serde_json::Value::as_str)
                .is_none_or(|text| text.trim().is_empty())
        })
        .map(|field| field.label)
        .collect()
}

/// Form fields visible to `role`.
pub fn visible_fields(fields: &'static [FieldDescriptor], role: Role) -> Vec<&'static FieldDescriptor> {
    fields
        .iter()
        .filter(|field| !field.admin_only || role == Role::Admin)
        .collect()
}

/// Error text for a screen banner, or `None` when the failure is handled
/// elsewhere: a stale (superseded-session) result is discarded, and a
/// failed refresh already ends the session via the logout flow.
pub fn surface_error(error: &ApiError) -> Option<String> {
    match error {
        ApiError::Auth(AuthError::SessionSuperseded | AuthError::RefreshFailed) => None,
        other => Some(other.user_message()),
    }
}

/// Descriptor-driven list/create/edit/delete screen.
#[component]
pub fn ResourcePage(descriptor: &'static ResourceDescriptor) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let items = RwSignal::new(Vec::<serde_json::Value>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let show_form = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<i64>);
    let form = RwSignal::new(serde_json::Map::new());
    let form_error = RwSignal::new(None::<String>);
    let related_options = RwSignal::new(HashMap::<&'static str, Vec<(String, String)>>::new());

    let load_items = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let api = crate::app::with_runtime(|runtime| runtime.api.clone());
                match api
                    .request(crate::net::Method::Get, descriptor.endpoint, None)
                    .await
                {
                    Ok(response) => items.set(rows_from_response(&response.body)),
                    Err(err) => {
                        if let Some(message) = surface_error(&err) {
                            error.set(Some(format!("Failed to fetch {}. {message}", descriptor.name)));
                        }
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            loading.set(false);
        }
    });

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load_items.run(());
    });

    let load_related_options = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        for field in descriptor.form_fields {
            if let FieldKind::RelatedRef { endpoint, label_key } = field.kind {
                let field_name = field.name;
                leptos::task::spawn_local(async move {
                    let api = crate::app::with_runtime(|runtime| runtime.api.clone());
                    let Ok(response) = api.request(crate::net::Method::Get, endpoint, None).await else {
                        return;
                    };
                    let options = rows_from_response(&response.body)
                        .iter()
                        .map(|row| (display_cell(row, "id"), display_cell(row, label_key)))
                        .collect::<Vec<_>>();
                    related_options.update(|map| {
                        map.insert(field_name, options);
                    });
                });
            }
        }
    });

    let open_create = move |_| {
        form.set(initial_form(descriptor.form_fields));
        editing_id.set(None);
        form_error.set(None);
        show_form.set(true);
        load_related_options.run(());
    };

    let open_edit = Callback::new(move |row: serde_json::Value| {
        form.set(form_from_row(descriptor.form_fields, &row));
        editing_id.set(row.get("id").and_then(serde_json::Value::as_i64));
        form_error.set(None);
        show_form.set(true);
        load_related_options.run(());
    });

    let on_save = Callback::new(move |()| {
        let current_form = form.get_untracked();
        let missing = missing_required_labels(descriptor.form_fields, &current_form);
        if !missing.is_empty() {
            form_error.set(Some(format!("Required: {}", missing.join(", "))));
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::app::with_runtime(|runtime| runtime.api.clone());
            let body = serde_json::Value::Object(current_form);
            let outcome = match editing_id.get_untracked() {
                Some(id) => {
                    api.put_json(&format!("{}{id}/", descriptor.endpoint), &body)
                        .await
                }
                None => api.post_json(descriptor.endpoint, &body).await,
            };
            match outcome {
                Ok(_) => {
                    show_form.set(false);
                    load_items.run(());
                }
                Err(err) => {
                    if let Some(message) = surface_error(&err) {
                        form_error.set(Some(message));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = current_form;
        }
    });

    let on_delete = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::app::with_runtime(|runtime| runtime.api.clone());
            match api.delete(&format!("{}{id}/", descriptor.endpoint)).await {
                Ok(_) => load_items.run(()),
                Err(err) => {
                    if let Some(message) = surface_error(&err) {
                        error.set(Some(format!("Failed to delete. {message}")));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let has_form = !descriptor.form_fields.is_empty();

    view! {
        <div class="resource-page">
            <div class="resource-page__header">
                <h1 class="resource-page__title">{descriptor.name}</h1>
                <Show when=move || descriptor.can_create>
                    <button class="btn btn--primary" on:click=open_create>
                        {format!("+ Add {}", singular(descriptor.name))}
                    </button>
                </Show>
            </div>

            <Show when=move || error.get().is_some()>
                <p class="resource-page__error" role="alert">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || {
                    view! { <p class="resource-page__loading">{format!("Loading {}...", descriptor.name)}</p> }
                }
            >
                <Show
                    when=move || !items.get().is_empty()
                    fallback=move || {
                        view! { <p class="resource-page__empty">{format!("No {} found.", descriptor.name)}</p> }
                    }
                >
                    <table class="resource-table">
                        <thead>
                            <tr>
                                {descriptor
                                    .columns
                                    .iter()
                                    .map(|column| view! { <th>{column.header}</th> })
                                    .collect::<Vec<_>>()}
                                <Show when=move || has_form>
                                    <th>"Actions"</th>
                                </Show>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                items
                                    .get()
                                    .into_iter()
                                    .map(|row| {
                                        let row_id = row.get("id").and_then(serde_json::Value::as_i64);
                                        let edit_row = row.clone();
                                        view! {
                                            <tr>
                                                {descriptor
                                                    .columns
                                                    .iter()
                                                    .map(|column| {
                                                        view! { <td>{display_cell(&row, column.key)}</td> }
                                                    })
                                                    .collect::<Vec<_>>()}
                                                <Show when=move || has_form>
                                                    <td class="resource-table__actions">
                                                        <button
                                                            class="btn btn--small"
                                                            on:click={
                                                                let edit_row = edit_row.clone();
                                                                move |_| open_edit.run(edit_row.clone())
                                                            }
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="btn btn--small btn--danger"
                                                            on:click=move |_| {
                                                                if let Some(id) = row_id {
                                                                    on_delete.run(id);
                                                                }
                                                            }
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </Show>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>

            <Show when=move || show_form.get()>
                <ResourceFormDialog
                    descriptor=descriptor
                    form=form
                    form_error=form_error
                    editing=editing_id
                    related_options=related_options
                    on_save=on_save
                    on_cancel=Callback::new(move |()| show_form.set(false))
                    role=Signal::derive(move || {
                        auth.get().user.map(|user| user.role).unwrap_or_default()
                    })
                />
            </Show>
        </div>
    }
}

/// Modal create/edit dialog rendered from the field descriptors.
#[component]
fn ResourceFormDialog(
    descriptor: &'static ResourceDescriptor,
    form: RwSignal<serde_json::Map<String, serde_json::Value>>,
    form_error: RwSignal<Option<String>>,
    editing: RwSignal<Option<i64>>,
    related_options: RwSignal<HashMap<&'static str, Vec<(String, String)>>>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    role: Signal<Role>,
) -> impl IntoView {
    let set_field = move |name: &'static str, value: String| {
        form.update(|map| {
            map.insert(name.to_owned(), serde_json::Value::String(value));
        });
    };
    let field_value = move |name: &'static str| {
        form.get()
            .get(name)
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_owned()
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>
                    {move || {
                        if editing.get().is_some() {
                            format!("Edit {}", singular(descriptor.name))
                        } else {
                            format!("Add {}", singular(descriptor.name))
                        }
                    }}
                </h2>
                <Show when=move || form_error.get().is_some()>
                    <p class="dialog__error" role="alert">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
                {move || {
                    visible_fields(descriptor.form_fields, role.get())
                        .into_iter()
                        .map(|field| {
                            let name = field.name;
                            view! {
                                <label class="dialog__label">
                                    {field.label}
                                    {match field.kind {
                                        FieldKind::Text | FieldKind::Number | FieldKind::Date => {
                                            let input_type = match field.kind {
                                                FieldKind::Number => "number",
                                                FieldKind::Date => "date",
                                                _ => "text",
                                            };
                                            view! {
                                                <input
                                                    class="dialog__input"
                                                    type=input_type
                                                    placeholder=field.placeholder
                                                    prop:value=move || field_value(name)
                                                    on:input=move |ev| set_field(name, event_target_value(&ev))
                                                />
                                            }
                                                .into_any()
                                        }
                                        FieldKind::TextArea => {
                                            view! {
                                                <textarea
                                                    class="dialog__input dialog__input--textarea"
                                                    placeholder=field.placeholder
                                                    prop:value=move || field_value(name)
                                                    on:input=move |ev| set_field(name, event_target_value(&ev))
                                                ></textarea>
                                            }
                                                .into_any()
                                        }
                                        FieldKind::Select { options } => {
                                            view! {
                                                <select
                                                    class="dialog__input"
                                                    prop:value=move || field_value(name)
                                                    on:change=move |ev| set_field(name, event_target_value(&ev))
                                                >
                                                    {options
                                                        .iter()
                                                        .map(|option| {
                                                            view! {
                                                                <option value=option.value>{option.label}</option>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </select>
                                            }
                                                .into_any()
                                        }
                                        FieldKind::RelatedRef { .. } => {
                                            view! {
                                                <select
                                                    class="dialog__input"
                                                    prop:value=move || field_value(name)
                                                    on:change=move |ev| set_field(name, event_target_value(&ev))
                                                >
                                                    <option value="">{field.placeholder}</option>
                                                    {move || {
                                                        related_options
                                                            .get()
                                                            .get(name)
                                                            .cloned()
                                                            .unwrap_or_default()
                                                            .into_iter()
                                                            .map(|(value, label)| {
                                                                view! { <option value=value>{label}</option> }
                                                            })
                                                            .collect::<Vec<_>>()
                                                    }}
                                                </select>
                                            }
                                                .into_any()
                                        }
                                    }}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_save.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Rough singular form for dialog titles ("Fields" -> "Field").
fn singular(plural: &str) -> String {
    plural.strip_suffix('s').unwrap_or(plural).to_owned()
}
