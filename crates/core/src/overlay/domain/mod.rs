pub mod overlay_resolver;
