//! Состояние страниц каталога: однократная загрузка списка товаров
//! и преобразование его в позиции MultiSelect.

use super::api;
use crate::shared::components::ui::SelectOption;
use contracts::Product;
use leptos::prelude::*;

/// Этап однократной загрузки каталога.
///
/// `Loading` запрещает параллельный повторный запрос, `Loaded` — любой
/// повторный. Неудачная загрузка возвращает `NotLoaded`, поэтому
/// следующее открытие панели повторяет попытку.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
}

impl LoadState {
    pub fn can_start(&self) -> bool {
        matches!(self, LoadState::NotLoaded)
    }
}

/// Товары каталога в виде позиций MultiSelect (подпись = название)
pub fn product_options(products: &[Product]) -> Vec<SelectOption> {
    products
        .iter()
        .map(|p| SelectOption::new(p.id.to_string(), p.title.clone()))
        .collect()
}

/// Подписи выбранных товаров в порядке выбора.
/// Id без соответствующей корректной позиции пропускаются.
pub fn selected_labels(selected: &[String], options: &[SelectOption]) -> Vec<String> {
    selected
        .iter()
        .filter_map(|id| options.iter().find(|o| o.is_well_formed() && &o.id == id))
        .map(|o| o.label.clone())
        .collect()
}

/// Id всех корректных позиций каталога — стартовый выбор страницы заявки
pub fn all_option_ids(options: &[SelectOption]) -> Vec<String> {
    options
        .iter()
        .filter(|o| o.is_well_formed())
        .map(|o| o.id.clone())
        .collect()
}

/// Сигналы каталога, используемые обеими страницами
#[derive(Clone, Copy)]
pub struct CatalogState {
    pub products: RwSignal<Vec<Product>>,
    pub load_state: RwSignal<LoadState>,
}

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state() -> CatalogState {
    CatalogState {
        products: RwSignal::new(Vec::new()),
        load_state: RwSignal::new(LoadState::default()),
    }
}

impl CatalogState {
    /// Позиции MultiSelect в порядке каталога
    pub fn options(&self) -> Signal<Vec<SelectOption>> {
        let products = self.products;
        Signal::derive(move || products.with(|p| product_options(p)))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let load_state = self.load_state;
        Signal::derive(move || load_state.get() == LoadState::Loading)
    }

    /// Запускает загрузку каталога. Вызовы при активной или уже
    /// завершённой загрузке игнорируются.
    pub fn load(&self) {
        if !self.load_state.get_untracked().can_start() {
            return;
        }
        self.load_state.set(LoadState::Loading);

        let products = self.products;
        let load_state = self.load_state;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_products().await {
                Ok(list) => {
                    // Страница могла быть размонтирована до ответа
                    let _ = products.try_set(list);
                    let _ = load_state.try_set(LoadState::Loaded);
                }
                Err(e) => {
                    log::error!("Не удалось загрузить список товаров: {}", e);
                    let _ = load_state.try_set(LoadState::NotLoaded);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_state_gate() {
        assert!(LoadState::NotLoaded.can_start());
        assert!(!LoadState::Loading.can_start());
        assert!(!LoadState::Loaded.can_start());
        assert_eq!(LoadState::default(), LoadState::NotLoaded);
    }

    #[test]
    fn test_product_options_mapping() {
        let products = vec![
            Product {
                id: 1,
                title: "iPhone 9".to_string(),
                category: "smartphones".to_string(),
                brand: Some("Apple".to_string()),
                price: 549.0,
            },
            Product {
                id: 7,
                title: "Cucumber".to_string(),
                category: "groceries".to_string(),
                brand: None,
                price: 1.49,
            },
        ];

        let options = product_options(&products);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].id, "1");
        assert_eq!(options[0].label, "iPhone 9");
        assert!(!options[0].selected);
        assert_eq!(options[1].id, "7");
    }

    #[test]
    fn test_selected_labels_order_and_dangling() {
        let options = vec![
            SelectOption::new("1", "A"),
            SelectOption::new("2", "B"),
            SelectOption::new("3", "C"),
        ];
        let selected: Vec<String> = vec!["3".into(), "404".into(), "1".into()];

        assert_eq!(selected_labels(&selected, &options), vec!["C", "A"]);
        assert_eq!(selected_labels(&["2".to_string()], &options), vec!["B"]);
        assert!(selected_labels(&[], &options).is_empty());
    }

    #[test]
    fn test_selected_labels_skip_malformed_options() {
        // Товар без названия не должен давать пустую строку в подтверждении
        let options = vec![SelectOption::new("1", "A"), SelectOption::new("2", "")];
        let selected: Vec<String> = vec!["1".into(), "2".into()];

        assert_eq!(selected_labels(&selected, &options), vec!["A"]);
    }

    #[test]
    fn test_all_option_ids_skip_malformed_options() {
        let options = vec![
            SelectOption::new("1", "A"),
            SelectOption::new("", "No id"),
            SelectOption::new("3", ""),
            SelectOption::new("4", "D"),
        ];

        assert_eq!(all_option_ids(&options), vec!["1", "4"]);
        assert!(all_option_ids(&[]).is_empty());
    }

    #[test]
    fn test_panel_open_requests_data_until_loaded() {
        use crate::shared::components::ui::multi_select::state::should_request_data;

        // Открытие панели просит данные только при пустом списке, а гейт
        // LoadState пропускает не больше одного запроса за раз.
        fn open_panel(load_state: &mut LoadState, options: &[SelectOption], requests: &mut u32) {
            if should_request_data(options) && load_state.can_start() {
                *load_state = LoadState::Loading;
                *requests += 1;
            }
        }

        let mut load_state = LoadState::NotLoaded;
        let mut options: Vec<SelectOption> = Vec::new();
        let mut requests = 0;

        // Первое открытие запускает загрузку
        open_panel(&mut load_state, &options, &mut requests);
        assert_eq!(requests, 1);
        assert_eq!(load_state, LoadState::Loading);

        // Повторное открытие до ответа: список ещё пуст, но гейт занят
        open_panel(&mut load_state, &options, &mut requests);
        assert_eq!(requests, 1);

        // Неудача возвращает гейт в NotLoaded — следующее открытие повторяет
        load_state = LoadState::NotLoaded;
        open_panel(&mut load_state, &options, &mut requests);
        assert_eq!(requests, 2);

        // Успех: список заполнен, дальнейшие открытия данные не просят
        options.push(SelectOption::new("1", "A"));
        load_state = LoadState::Loaded;
        open_panel(&mut load_state, &options, &mut requests);
        assert_eq!(requests, 2);
        assert!(!should_request_data(&options));
    }
}
