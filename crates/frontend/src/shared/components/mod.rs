pub mod confirm_prompt;
pub mod demo_data_button;
pub mod empty_state;
pub mod filter_panel;
pub mod list_toolbar;
pub mod pagination_controls;
pub mod sort_select;
pub mod sortable_header;
pub mod status_toast;
