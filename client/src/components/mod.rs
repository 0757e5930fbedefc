pub mod calculator;
pub mod currency_converter;
pub mod notice_bar;
pub mod share_button;
pub mod tab_nav;
pub mod timezone_converter;
pub mod unit_converter;
pub mod wheel_of_names;
