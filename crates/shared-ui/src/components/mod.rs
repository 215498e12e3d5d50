pub mod button;
pub mod card;
pub mod detail_list;
pub mod navbar;
pub mod notice;
pub mod page_header;

pub use button::*;
pub use card::*;
pub use detail_list::*;
pub use navbar::*;
pub use notice::*;
pub use page_header::*;
