//! Core containers shared by the application

mod ordered_list;

pub use ordered_list::{OrderedList, SharedList};
