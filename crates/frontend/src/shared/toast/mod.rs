use crate::shared::icons::icon;
use leptos::prelude::*;
use uuid::Uuid;

#[derive(Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
}

const TOAST_LIFETIME_MS: u32 = 4_000;

/// Сервис для централизованного показа всплывающих уведомлений
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    /// Показать уведомление об успехе
    pub fn success(&self, message: impl Into<String>) {
        let id = Uuid::new_v4();
        let message = message.into();
        self.toasts.update(|list| list.push(Toast { id, message }));

        // Таймер может сработать после размонтирования контейнера
        let toasts = self.toasts;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            let _ = toasts.try_update(|list| list.retain(|t| t.id != id));
        });
    }

    /// Убрать уведомление до истечения времени показа
    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

/// Контейнер уведомлений. Размещается один раз в корне приложения.
///
/// Использование:
/// ```ignore
/// let toast = use_context::<ToastService>().unwrap();
/// toast.success("Заявка отправлена");
/// ```
#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="toast-container">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast toast--success">
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| service.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
