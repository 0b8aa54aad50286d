use crate::domain::products::ui::{ProductFormPage, ProductPickerPage};
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::header::Header;
use crate::shared::toast::{ToastService, Toaster};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Provide ToastService for centralized notifications
    provide_context(ToastService::new());

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Header />
        <main class="app-main">
            {move || match ctx.page.get() {
                Page::Picker => view! { <ProductPickerPage /> }.into_any(),
                Page::Form => view! { <ProductFormPage /> }.into_any(),
            }}
        </main>
        <Toaster />
    }
}
