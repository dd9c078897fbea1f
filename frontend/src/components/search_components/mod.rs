pub mod filter_input_bar;
pub mod scheme_result_card;
pub mod scheme_result_list;
pub mod search_alert;
