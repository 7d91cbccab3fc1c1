pub mod banner;
pub mod colors;
pub mod format;
pub mod logging;
pub mod model_view;
pub mod print;
