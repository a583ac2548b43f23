pub mod post_details;
pub mod post_list;
