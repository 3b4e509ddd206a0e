pub mod animator;
pub mod events;
pub mod layout;
pub mod pose;
pub mod sheet;
pub mod zorder;
