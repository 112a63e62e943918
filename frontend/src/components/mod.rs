pub mod flight_table;
pub mod navbar;
pub mod search_bar;
pub mod theme;

pub use flight_table::FlightTable;
pub use navbar::Navbar;
pub use search_bar::SearchBar;
pub use theme::ThemeProvider;
