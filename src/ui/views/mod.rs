pub mod player;
pub mod sidebar;
