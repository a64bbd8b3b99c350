//! Field Input Component
//!
//! One `<label>` wrapping the input for a field definition.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};

use household_roster::{FieldDef, FieldKind, FieldValue, SelectOption};

use crate::context::BuilderContext;

fn checkbox_state(ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .is_some_and(|input| input.checked())
}

fn select_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
        .map(|select| select.value())
        .unwrap_or_default()
}

fn text_input(ctx: BuilderContext, name: String, input_type: &'static str) -> AnyView {
    let read_name = name.clone();
    let write_name = name.clone();
    view! {
        <input
            type=input_type
            name=name
            prop:value=move || ctx.draft.with(|d| d.text(&read_name).to_string())
            on:input=move |ev| ctx.set_field(&write_name, FieldValue::Text(event_target_value(&ev)))
        />
    }
    .into_any()
}

fn checkbox_input(ctx: BuilderContext, name: String) -> AnyView {
    let read_name = name.clone();
    let write_name = name.clone();
    view! {
        <input
            type="checkbox"
            name=name
            prop:checked=move || ctx.draft.with(|d| d.flag(&read_name))
            on:change=move |ev| ctx.set_field(&write_name, FieldValue::Flag(checkbox_state(&ev)))
        />
    }
    .into_any()
}

fn select_input(ctx: BuilderContext, name: String, options: Vec<SelectOption>) -> AnyView {
    let write_name = name.clone();
    // Selection is driven per option so a reset re-selects the placeholder
    let options = options
        .into_iter()
        .map(|opt| {
            let field_name = name.clone();
            let value = opt.value.clone();
            view! {
                <option
                    value=opt.value
                    prop:selected=move || ctx.draft.with(|d| d.text(&field_name) == value)
                >
                    {opt.label}
                </option>
            }
        })
        .collect_view();
    view! {
        <select
            name=name
            on:change=move |ev| ctx.set_field(&write_name, FieldValue::Text(select_value(&ev)))
        >
            {options}
        </select>
    }
    .into_any()
}

/// Labelled input bound to the form draft
#[component]
pub fn FieldInput(field: FieldDef) -> impl IntoView {
    let ctx = use_context::<BuilderContext>().expect("BuilderContext should be provided");
    let name = field.name;

    let input = match field.kind {
        FieldKind::Text => text_input(ctx, name, "text"),
        FieldKind::Number => text_input(ctx, name, "number"),
        FieldKind::Checkbox => checkbox_input(ctx, name),
        FieldKind::Select { options } => select_input(ctx, name, options),
    };

    view! {
        <div>
            <label>{field.caption} " " {input}</label>
        </div>
    }
}
