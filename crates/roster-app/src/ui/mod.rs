pub mod controls;
pub mod notifications;
pub mod roster_list;
