pub mod drop_down_cities;
pub mod info_window;
pub mod map_marker;
pub mod map_renderer;
pub mod map_wrapper;
