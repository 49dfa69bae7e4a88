pub mod card_strip;
pub mod help_bar;
pub mod page_indicator;
