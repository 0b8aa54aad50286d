use leptos::prelude::*;

/// Checkbox with a label. Check state is driven through the DOM property
/// so programmatic bulk changes repaint rows the user already touched.
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Indeterminate state (used for "select all" over a partial selection)
    #[prop(optional, into)]
    indeterminate: MaybeProp<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// ID for the checkbox element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes for wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let wrapper_class =
        move || format!("form__checkbox-wrapper {}", class.get().unwrap_or_default());

    view! {
        <div class=wrapper_class>
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                prop:indeterminate=move || indeterminate.get().unwrap_or(false)
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=checkbox_id>
                {label}
            </label>
        </div>
    }
}
