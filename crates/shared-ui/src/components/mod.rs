// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod detail_list;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod search_bar;
pub mod skeleton;
pub mod textarea;

// Primitive wrappers
pub mod toast;

// Overlays and pickers
pub mod alert_dialog;
pub mod combobox;
pub mod dialog;
pub mod modal_shell;
pub mod popover;

// Layout
pub mod navbar;
pub mod sidebar;

// Dashboard widgets
pub mod bar_chart;
pub mod event_list;
pub mod stat_card;

pub use alert_dialog::*;
pub use badge::*;
pub use bar_chart::*;
pub use button::*;
pub use card::*;
pub use combobox::*;
pub use data_table::*;
pub use detail_list::*;
pub use dialog::*;
pub use event_list::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use modal_shell::*;
pub use navbar::*;
pub use page_header::*;
pub use popover::*;
pub use search_bar::*;
pub use sidebar::*;
pub use skeleton::*;
pub use stat_card::*;
pub use textarea::*;
pub use toast::*;
