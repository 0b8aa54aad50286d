use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Страницы приложения
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Picker,
    Form,
}

impl Page {
    /// Ключ страницы для строки запроса
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Picker => "picker",
            Page::Form => "form",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "form" => Page::Form,
            _ => Page::Picker,
        }
    }

    /// Название пункта в шапке
    pub fn title(&self) -> &'static str {
        match self {
            Page::Picker => "Подбор",
            Page::Form => "Заявка",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::Picker => "products",
            Page::Form => "form",
        }
    }

    pub fn all() -> [Page; 2] {
        [Page::Picker, Page::Form]
    }
}

/// Параметры приложения в строке запроса
#[derive(Serialize, Deserialize, Default)]
struct PageQuery {
    page: String,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::default()),
        }
    }

    /// Восстанавливает активную страницу из `?page=` и дальше отражает
    /// переключения в URL через history.replaceState.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: PageQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if !params.page.is_empty() {
            self.page.set(Page::from_str(&params.page));
        }

        let this = *self;
        Effect::new(move |_| {
            let query_string = serde_qs::to_string(&PageQuery {
                page: this.page.get().as_str().to_string(),
            })
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            // Use untracked to avoid creating unnecessary reactive dependencies
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        self.page.set(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_round_trip() {
        for page in Page::all() {
            assert_eq!(Page::from_str(page.as_str()), page);

            let query = serde_qs::to_string(&PageQuery {
                page: page.as_str().to_string(),
            })
            .unwrap();
            let parsed: PageQuery = serde_qs::from_str(&query).unwrap();
            assert_eq!(Page::from_str(&parsed.page), page);
        }
    }

    #[test]
    fn test_unknown_page_falls_back_to_picker() {
        assert_eq!(Page::from_str("dashboard"), Page::Picker);
        assert_eq!(Page::from_str(""), Page::Picker);
    }
}
