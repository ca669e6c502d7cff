pub mod category_chips;
pub mod profile_card;
pub mod progress_bar;
pub mod tab_bar;
pub mod test_list;
pub mod translator_panel;
pub mod word_list;
