pub mod aggregate; // Frekvenčné počty pre grafy
pub mod filter; // Filtrovanie a projekcia riadkov

pub use aggregate::count_by;
pub use filter::{filter, FilterSelection, FilteredView};
