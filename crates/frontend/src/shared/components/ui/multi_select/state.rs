//! Чистая логика выбора для MultiSelect: переключение элементов,
//! массовые операции, фильтрация и свёртка бейджей.
//!
//! Функции не трогают DOM и сигналы, поэтому тестируются нативно.

/// Одна позиция списка MultiSelect.
///
/// Идентичность определяется по `id`, подписи могут повторяться.
/// Флаг `selected` — снимок для первичного заполнения неконтролируемого
/// виджета; сам виджет его никогда не перезаписывает.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub id: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            selected: false,
        }
    }

    /// Позиции с пустым id или подписью не выбираются и не отображаются.
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty() && !self.label.is_empty()
    }
}

/// Переключает один элемент: уже выбранный id убирается, новый
/// добавляется в конец. Повторно выбранный элемент встаёт в конец списка.
pub fn toggle_id(selected: &[String], id: &str) -> Vec<String> {
    let mut next: Vec<String> = selected
        .iter()
        .filter(|s| s.as_str() != id)
        .cloned()
        .collect();
    if next.len() == selected.len() {
        next.push(id.to_string());
    }
    next
}

/// "Выбрать все" по корректным позициям списка.
///
/// Если все такие id уже выбраны, вызов схлопывается в очистку,
/// иначе возвращает полный список id в порядке позиций.
pub fn toggle_all(selected: &[String], options: &[SelectOption]) -> Vec<String> {
    let all_ids: Vec<String> = options
        .iter()
        .filter(|o| o.is_well_formed())
        .map(|o| o.id.clone())
        .collect();

    let fully_selected =
        !all_ids.is_empty() && all_ids.iter().all(|id| selected.contains(id));

    if fully_selected {
        Vec::new()
    } else {
        all_ids
    }
}

/// Разрешены ли массовые действия: пока список грузится или пуст,
/// "выбрать все" и "очистить" молчат (колбэк изменения не вызывается).
pub fn bulk_allowed(loading: bool, options: &[SelectOption]) -> bool {
    !loading && !options.is_empty()
}

/// Нужно ли при открытии панели просить данные у владельца.
/// Колбэк открытия срабатывает, только пока список позиций пуст.
pub fn should_request_data(options: &[SelectOption]) -> bool {
    options.is_empty()
}

/// Регистронезависимый поиск подстроки по подписи.
/// Некорректные позиции отбрасываются, выбор не затрагивается.
pub fn filter_options(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|o| o.is_well_formed())
        .filter(|o| needle.is_empty() || o.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Строка бейджей: первые `max_visible` разрешённых позиций в порядке
/// выбора плюс количество не поместившихся.
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeRow {
    pub visible: Vec<SelectOption>,
    pub hidden_count: usize,
}

/// Сопоставляет выбранные id с позициями списка. Устаревшие id
/// (без соответствующей позиции) молча пропускаются.
pub fn resolve_badges(
    selected: &[String],
    options: &[SelectOption],
    max_visible: usize,
) -> BadgeRow {
    let resolved: Vec<SelectOption> = selected
        .iter()
        .filter_map(|id| options.iter().find(|o| o.id == *id && o.is_well_formed()))
        .cloned()
        .collect();

    let hidden_count = resolved.len().saturating_sub(max_visible);
    let visible = resolved.into_iter().take(max_visible).collect();

    BadgeRow {
        visible,
        hidden_count,
    }
}

/// Id позиций, помеченных `selected` в исходных данных. Используется как
/// стартовый выбор неконтролируемого виджета, если явный не передан.
pub fn preselected_ids(options: &[SelectOption]) -> Vec<String> {
    options
        .iter()
        .filter(|o| o.selected && o.is_well_formed())
        .map(|o| o.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<SelectOption> {
        vec![
            SelectOption::new("1", "A"),
            SelectOption::new("2", "B"),
            SelectOption::new("3", "C"),
        ]
    }

    #[test]
    fn test_toggle_appends_and_removes() {
        let sel = toggle_id(&[], "1");
        assert_eq!(sel, vec!["1"]);

        let sel = toggle_id(&sel, "2");
        assert_eq!(sel, vec!["1", "2"]);

        let sel = toggle_id(&sel, "1");
        assert_eq!(sel, vec!["2"]);
    }

    #[test]
    fn test_retoggle_moves_id_to_end() {
        let sel: Vec<String> = vec!["1".into(), "2".into()];
        let sel = toggle_id(&sel, "1");
        let sel = toggle_id(&sel, "1");
        assert_eq!(sel, vec!["2", "1"]);
    }

    #[test]
    fn test_toggle_all_absorbing_pair() {
        let options = abc();

        // Частичный выбор расширяется до полного списка
        let sel: Vec<String> = vec!["2".into()];
        assert_eq!(toggle_all(&sel, &options), vec!["1", "2", "3"]);

        // Полный выбор схлопывается в пустой
        let sel: Vec<String> = vec!["3".into(), "1".into(), "2".into()];
        assert_eq!(toggle_all(&sel, &options), Vec::<String>::new());

        // Повторное "выбрать все" после очистки снова даёт полный список
        assert_eq!(toggle_all(&[], &options), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_toggle_all_skips_malformed_options() {
        let mut options = abc();
        options.push(SelectOption::new("", "No id"));
        options.push(SelectOption::new("4", ""));

        assert_eq!(toggle_all(&[], &options), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_toggle_all_on_empty_options() {
        assert_eq!(toggle_all(&[], &[]), Vec::<String>::new());
    }

    #[test]
    fn test_bulk_actions_gated_while_loading_or_empty() {
        let options = abc();

        assert!(bulk_allowed(false, &options));
        assert!(!bulk_allowed(true, &options));
        assert!(!bulk_allowed(false, &[]));
        assert!(!bulk_allowed(true, &[]));
    }

    #[test]
    fn test_open_requests_data_only_while_empty() {
        assert!(should_request_data(&[]));
        assert!(!should_request_data(&abc()));
    }

    #[test]
    fn test_selection_scenario() {
        let options = abc();

        let sel = toggle_id(&[], "1");
        assert_eq!(sel, vec!["1"]);

        let sel = toggle_id(&sel, "2");
        assert_eq!(sel, vec!["1", "2"]);

        let sel = toggle_id(&sel, "1");
        assert_eq!(sel, vec!["2"]);

        let sel = toggle_all(&sel, &options);
        assert_eq!(sel, vec!["1", "2", "3"]);

        // Очистка опустошает выбор независимо от состояния
        let sel: Vec<String> = Vec::new();
        assert!(sel.is_empty());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let options = vec![
            SelectOption::new("1", "iPhone 9"),
            SelectOption::new("2", "Samsung Universe 9"),
            SelectOption::new("3", "Cucumber"),
        ];

        let hits = filter_options(&options, "PHONE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        let hits = filter_options(&options, "9");
        assert_eq!(hits.len(), 2);

        // Пустой запрос возвращает всё
        assert_eq!(filter_options(&options, "").len(), 3);
    }

    #[test]
    fn test_filter_drops_malformed_options() {
        let options = vec![
            SelectOption::new("1", "A"),
            SelectOption::new("", "B"),
            SelectOption::new("3", ""),
        ];

        let hits = filter_options(&options, "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn test_badges_truncate_with_overflow() {
        let options: Vec<SelectOption> = (1..=5)
            .map(|i| SelectOption::new(i.to_string(), format!("P{}", i)))
            .collect();
        let selected: Vec<String> = (1..=5).map(|i| i.to_string()).collect();

        let row = resolve_badges(&selected, &options, 3);
        assert_eq!(row.visible.len(), 3);
        assert_eq!(row.hidden_count, 2);
        assert_eq!(row.visible[0].label, "P1");
        assert_eq!(row.visible[2].label, "P3");
    }

    #[test]
    fn test_badges_keep_selection_order() {
        let options = abc();
        let selected: Vec<String> = vec!["3".into(), "1".into()];

        let row = resolve_badges(&selected, &options, 3);
        assert_eq!(row.hidden_count, 0);
        assert_eq!(row.visible[0].label, "C");
        assert_eq!(row.visible[1].label, "A");
    }

    #[test]
    fn test_badges_skip_dangling_ids() {
        let options = abc();
        let selected: Vec<String> = vec!["1".into(), "404".into(), "2".into()];

        let row = resolve_badges(&selected, &options, 3);
        assert_eq!(row.visible.len(), 2);
        assert_eq!(row.hidden_count, 0);
    }

    #[test]
    fn test_preselected_ids_from_flags() {
        let mut options = abc();
        options[1].selected = true;
        options[2].selected = true;

        assert_eq!(preselected_ids(&options), vec!["2", "3"]);
        assert!(preselected_ids(&abc()).is_empty());
    }
}
