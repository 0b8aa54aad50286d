use leptos::prelude::*;

/// Button with variants ("primary", "secondary", "ghost") and sizes ("md", "sm")
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let button_class = move || {
        let variant_class = match variant.get().as_deref().unwrap_or("primary") {
            "secondary" => "button--secondary",
            "ghost" => "button--ghost",
            _ => "button--primary",
        };
        let size_class = match size.get().as_deref() {
            Some("sm") => " button--small",
            _ => "",
        };
        format!(
            "button {}{} {}",
            variant_class,
            size_class,
            class.get().unwrap_or_default()
        )
    };

    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=button_class
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
