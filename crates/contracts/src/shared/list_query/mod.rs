//! Универсальный механизм списков: поиск, фильтры, сортировка, пагинация.
//!
//! Один и тот же код используется страницами frontend (производное состояние
//! поверх загруженного массива) и эндпоинтами `/api/<collection>/list` backend.
//!
//! ```rust,ignore
//! let config = Document::list_config();
//! let mut state = config.initial_state();
//! state.set_search("prospectus");
//! state.set_filter("language", "fr");
//! let page = apply_list_query(&documents, &config, &state);
//! println!("{} / {} ({})", page.page, page.total_pages, page.total_matching);
//! ```

pub mod collation;
pub mod config;
pub mod engine;
pub mod state;

pub use config::{ComparatorKind, FilterDimension, ListConfig, SortKey};
pub use engine::{
    apply_list_query, distinct_filter_values, total_pages, ListPage, Listable, SortValue,
};
pub use state::{is_unconstrained, ListViewState, SortDirection, FILTER_ALL};
