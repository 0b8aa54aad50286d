use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Каталог"</span>
                <nav class="header__nav">
                    {Page::all()
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button
                                    class="header__nav-item"
                                    class=(
                                        "header__nav-item--active",
                                        move || ctx.page.get() == page,
                                    )
                                    on:click=move |_| ctx.navigate(page)
                                >
                                    {icon(page.icon_name())}
                                    <span>{page.title()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
