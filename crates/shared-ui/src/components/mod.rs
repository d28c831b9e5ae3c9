pub mod badge;
pub mod card;
pub mod data_table;
pub mod navbar;
pub mod page_header;

pub use badge::*;
pub use card::*;
pub use data_table::*;
pub use navbar::*;
pub use page_header::*;
