pub mod hull_station;
pub mod offset_table;
pub mod offset_table_option;

pub use hull_station::*;
pub use offset_table::*;
pub use offset_table_option::*;
