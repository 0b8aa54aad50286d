use super::state::{self, SelectOption};
use crate::shared::components::ui::{Badge, Button, Checkbox};
use crate::shared::icons::icon;
use leptos::prelude::*;
use web_sys::window;

/// Выпадающий список множественного выбора.
///
/// Поддерживает:
/// - Контролируемый (`selected_ids`) и неконтролируемый режим
/// - Бейджи выбранных позиций с усечением в "+K"
/// - Поиск по подписи и действия "выбрать все"/"очистить"
/// - Индикатор загрузки и колбэк открытия для ленивой подгрузки данных
#[component]
pub fn MultiSelect(
    /// Полный список позиций в порядке отображения
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Контролируемый выбор; если не задан, виджет ведёт выбор сам
    #[prop(optional)]
    selected_ids: Option<Signal<Vec<String>>>,
    /// Стартовый выбор неконтролируемого режима; без него берутся
    /// позиции с флагом `selected`
    #[prop(optional)]
    initial_selected_ids: Option<Vec<String>>,
    /// Вызывается с полным новым списком id при каждом изменении
    on_selection_change: Callback<Vec<String>>,
    /// Сколько бейджей показывать до свёртки остатка в "+K"
    #[prop(default = 3)]
    max_visible_badges: usize,
    /// Срабатывает при открытии панели с ещё пустым списком позиций
    #[prop(optional)]
    on_panel_open: Option<Callback<()>>,
    /// Индикатор загрузки списка
    #[prop(optional, into)]
    is_loading: MaybeProp<bool>,
    /// Текст триггера при пустом выборе
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (search, set_search) = signal(String::new());

    // Неконтролируемый режим держит выбор в собственном сигнале
    let controlled = selected_ids.is_some();
    let internal = RwSignal::new(initial_selected_ids.unwrap_or_else(|| {
        options.with_untracked(|opts| state::preselected_ids(opts))
    }));
    let selection = selected_ids.unwrap_or_else(|| internal.into());

    let loading = move || is_loading.get().unwrap_or(false);

    // Единая точка изменения: внутренний сигнал плюс отчёт наверх
    let apply_selection = move |next: Vec<String>| {
        if !controlled {
            internal.set(next.clone());
        }
        on_selection_change.run(next);
    };

    let toggle_item = move |id: String| {
        let next = selection.with_untracked(|sel| state::toggle_id(sel, &id));
        apply_selection(next);
    };

    // Массовые действия по пустому или ещё не загруженному списку молчат
    let bulk_allowed = move || options.with_untracked(|o| state::bulk_allowed(loading(), o));

    let toggle_all = move || {
        if !bulk_allowed() {
            return;
        }
        let next = selection
            .with_untracked(|sel| options.with_untracked(|opts| state::toggle_all(sel, opts)));
        apply_selection(next);
    };

    let clear_all = move || {
        if !bulk_allowed() {
            return;
        }
        apply_selection(Vec::new());
    };

    let toggle_panel = move || {
        let opening = !open.get_untracked();
        set_open.set(opening);
        if opening && options.with_untracked(|o| state::should_request_data(o)) {
            if let Some(cb) = on_panel_open {
                cb.run(());
            }
        }
    };

    // Закрытие по клику вне виджета: внутренние клики гасятся
    // stop_propagation, до window доходят только внешние
    Effect::new(move |_| {
        if open.get() {
            use wasm_bindgen::prelude::*;
            use wasm_bindgen::JsCast;

            let closure = Closure::wrap(Box::new(move |_event: web_sys::MouseEvent| {
                // Слушатель живёт дольше виджета
                let _ = set_open.try_set(false);
            }) as Box<dyn FnMut(_)>);

            if let Some(window) = window() {
                let _ = window
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    });

    let visible_options = move || options.with(|opts| state::filter_options(opts, &search.get()));

    let badge_row = move || {
        selection
            .with(|sel| options.with(|opts| state::resolve_badges(sel, opts, max_visible_badges)))
    };

    let all_selected = move || {
        options.with(|opts| {
            let well_formed: Vec<&SelectOption> =
                opts.iter().filter(|o| o.is_well_formed()).collect();
            !well_formed.is_empty()
                && selection.with(|sel| well_formed.iter().all(|o| sel.contains(&o.id)))
        })
    };

    let placeholder_text =
        move || placeholder.get().unwrap_or_else(|| "Выберите позиции...".to_string());

    view! {
        <div class="multi-select">
            <div
                class="multi-select__trigger"
                class=("multi-select__trigger--open", move || open.get())
                on:click=move |ev| {
                    ev.stop_propagation();
                    toggle_panel();
                }
            >
                {move || {
                    let row = badge_row();
                    if row.visible.is_empty() && row.hidden_count == 0 {
                        view! {
                            <span class="multi-select__placeholder">{placeholder_text()}</span>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="multi-select__badges">
                                {row
                                    .visible
                                    .into_iter()
                                    .map(|opt| {
                                        let id = opt.id.clone();
                                        view! {
                                            <Badge
                                                variant="primary"
                                                on_remove=Callback::new(move |_| toggle_item(id.clone()))
                                            >
                                                {opt.label.clone()}
                                            </Badge>
                                        }
                                    })
                                    .collect_view()}
                                {(row.hidden_count > 0)
                                    .then(|| {
                                        view! {
                                            <Badge variant="neutral">
                                                {format!("+{}", row.hidden_count)}
                                            </Badge>
                                        }
                                    })}
                            </div>
                        }
                            .into_any()
                    }
                }}
                <span class="multi-select__chevron">{icon("chevron-down")}</span>
            </div>

            <Show when=move || open.get()>
                <div class="multi-select__panel" on:click=move |ev| ev.stop_propagation()>
                    <div class="multi-select__search">
                        <input
                            type="text"
                            class="form__input"
                            placeholder="Поиск по названию..."
                            prop:value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Escape" {
                                    set_open.set(false);
                                }
                            }
                        />
                    </div>

                    <div class="multi-select__actions">
                        <Checkbox
                            label="Выбрать все"
                            checked=Signal::derive(all_selected)
                            indeterminate=Signal::derive(move || {
                                !all_selected() && selection.with(|sel| !sel.is_empty())
                            })
                            on_change=Callback::new(move |_| toggle_all())
                        />
                        <Button
                            variant="ghost"
                            size="sm"
                            on_click=Callback::new(move |_| clear_all())
                        >
                            "Очистить"
                        </Button>
                    </div>

                    <div class="multi-select__list">
                        {move || {
                            if loading() {
                                view! {
                                    <div class="multi-select__loading">"Загрузка..."</div>
                                }
                                    .into_any()
                            } else {
                                let filtered = visible_options();
                                if filtered.is_empty() {
                                    view! {
                                        <div class="multi-select__empty">"Ничего не найдено"</div>
                                    }
                                        .into_any()
                                } else {
                                    filtered
                                        .into_iter()
                                        .map(|opt| {
                                            let check_id = opt.id.clone();
                                            let row_id = opt.id.clone();
                                            view! {
                                                <div class="multi-select__option">
                                                    <Checkbox
                                                        label=opt.label.clone()
                                                        checked=Signal::derive(move || {
                                                            selection.with(|sel| sel.contains(&check_id))
                                                        })
                                                        on_change=Callback::new(move |_| {
                                                            toggle_item(row_id.clone())
                                                        })
                                                    />
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }
                        }}
                    </div>

                    <div class="multi-select__footer">
                        <Button
                            variant="secondary"
                            size="sm"
                            on_click=Callback::new(move |_| set_open.set(false))
                        >
                            "Закрыть"
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
