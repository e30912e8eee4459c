pub mod empty_state;
pub mod gift_card;
pub mod gift_grid;
pub mod language_select;
pub mod nav_bar;
pub mod notification;
pub mod stars_counter;

pub use empty_state::EmptyState;
pub use gift_card::GiftCard;
pub use gift_grid::GiftGrid;
pub use language_select::LanguageSelect;
pub use nav_bar::NavBar;
pub use notification::Notification;
pub use stars_counter::StarsCounter;
