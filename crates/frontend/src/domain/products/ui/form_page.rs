use super::super::state::{self, LoadState};
use crate::shared::components::ui::{Button, Input, MultiSelect, Textarea};
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

/// Страница заявки: контролируемый MultiSelect, в котором после
/// загрузки каталога выбраны все товары. Отправка проверяет поля
/// и подтверждается тостом со списком выбранного.
#[component]
pub fn ProductFormPage() -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");

    let catalog = state::create_state();
    let options = catalog.options();

    let (name, set_name) = signal(String::new());
    let (comment, set_comment) = signal(String::new());
    let selected_ids = RwSignal::new(Vec::<String>::new());

    let (name_error, set_name_error) = signal(String::new());
    let (selection_error, set_selection_error) = signal(String::new());

    // После первой загрузки каталога выбираем все товары
    let (preselected, set_preselected) = signal(false);
    Effect::new(move |_| {
        if catalog.load_state.get() == LoadState::Loaded && !preselected.get_untracked() {
            set_preselected.set(true);
            let all_ids = options.with_untracked(|opts| state::all_option_ids(opts));
            selected_ids.set(all_ids);
        }
    });

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let name_ok = !name.get_untracked().trim().is_empty();
        set_name_error.set(if name_ok {
            String::new()
        } else {
            "Укажите имя".to_string()
        });

        let labels = selected_ids
            .with_untracked(|sel| options.with_untracked(|opts| state::selected_labels(sel, opts)));
        let selection_ok = !labels.is_empty();
        set_selection_error.set(if selection_ok {
            String::new()
        } else {
            "Выберите хотя бы один товар".to_string()
        });

        if !name_ok || !selection_ok {
            return;
        }

        toast.success(format!("Заявка отправлена: {}", labels.join(", ")));
    };

    view! {
        <div class="page">
            <h2 class="page__title">"Заявка на товары"</h2>

            <form class="form" on:submit=handle_submit>
                <Input
                    label="Имя"
                    value=name
                    on_input=Callback::new(move |v| set_name.set(v))
                    placeholder="Иван Петров"
                    error=name_error
                />

                <div class="form__group">
                    <label class="form__label">"Товары"</label>
                    <MultiSelect
                        options=options
                        selected_ids=Signal::from(selected_ids)
                        on_selection_change=Callback::new(move |ids: Vec<String>| {
                            selected_ids.set(ids);
                            set_selection_error.set(String::new());
                        })
                        on_panel_open=Callback::new(move |_| catalog.load())
                        is_loading=catalog.is_loading()
                        placeholder="Выберите товары..."
                    />
                    {move || {
                        let err = selection_error.get();
                        (!err.is_empty()).then(|| view! { <span class="form__error">{err}</span> })
                    }}
                </div>

                <Textarea
                    label="Комментарий"
                    value=comment
                    on_input=Callback::new(move |v| set_comment.set(v))
                    placeholder="Пожелания к заявке"
                    rows=3
                />

                <div class="form__actions">
                    <Button button_type="submit">
                        {icon("check")}
                        "Отправить"
                    </Button>
                </div>
            </form>
        </div>
    }
}
