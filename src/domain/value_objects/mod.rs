pub mod price;
pub mod share_count;
