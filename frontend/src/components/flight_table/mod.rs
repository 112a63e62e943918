pub mod expanded_details;
pub mod flight_row;
pub mod flight_table;
pub mod table_header;
pub mod table_pagination;

pub use flight_table::FlightTable;
