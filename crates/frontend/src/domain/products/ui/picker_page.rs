use super::super::state;
use crate::shared::components::ui::MultiSelect;
use leptos::prelude::*;

/// Страница подбора товаров: неконтролируемый MultiSelect
/// и живой отпечаток текущего выбора под ним.
#[component]
pub fn ProductPickerPage() -> impl IntoView {
    let catalog = state::create_state();
    let options = catalog.options();

    // Страница хранит копию выбора только для отображения
    let (selected_ids, set_selected_ids) = signal::<Vec<String>>(Vec::new());

    let selected = move || {
        selected_ids.with(|sel| options.with(|opts| state::selected_labels(sel, opts)))
    };

    view! {
        <div class="page">
            <h2 class="page__title">"Подбор товаров"</h2>
            <p class="page__hint">
                "Список товаров загружается при первом открытии выпадающего списка."
            </p>

            <MultiSelect
                options=options
                on_selection_change=Callback::new(move |ids: Vec<String>| {
                    set_selected_ids.set(ids)
                })
                on_panel_open=Callback::new(move |_| catalog.load())
                is_loading=catalog.is_loading()
                placeholder="Выберите товары..."
            />

            <div class="selection-echo">
                {move || {
                    let labels = selected();
                    if labels.is_empty() {
                        view! {
                            <p class="selection-echo__empty">"Ничего не выбрано"</p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <p class="selection-echo__count">
                                "Выбрано позиций: " {labels.len()}
                            </p>
                            <ul class="selection-echo__list">
                                {labels
                                    .into_iter()
                                    .map(|label| view! { <li>{label}</li> })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
