use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Remove handler; when present the badge renders a "x" button.
    /// Its click does not propagate to the badge container.
    #[prop(optional)]
    on_remove: Option<Callback<()>>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
            {on_remove
                .map(|handler| {
                    view! {
                        <button
                            type="button"
                            class="badge__remove"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                handler.run(());
                            }
                        >
                            "\u{00d7}"
                        </button>
                    }
                })}
        </span>
    }
}
