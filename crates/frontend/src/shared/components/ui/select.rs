use leptos::prelude::*;

/// Select component with label and placeholder option
///
/// The placeholder option carries an empty value; selecting it reports `""`.
#[component]
pub fn Select(
    /// Label text
    #[prop(into)]
    label: String,
    /// Current value (`""` selects the placeholder)
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    on_change: Callback<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
    /// Placeholder option text
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// ID for the select element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "-- Select --".to_string());
    let label_for = id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=label_for>
                {label}
            </label>
            <select
                id=id
                class="form__select"
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
