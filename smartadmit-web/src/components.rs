pub mod brand;
pub mod buffered_input;
pub mod chip_list;
pub mod option_select;
pub mod progress_timeline;
pub mod steps;
