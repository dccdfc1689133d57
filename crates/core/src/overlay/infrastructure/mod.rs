pub mod directory_overlay_resolver;
pub mod in_memory_overlay_resolver;
