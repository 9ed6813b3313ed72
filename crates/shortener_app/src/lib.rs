//! Terminal front end for the URL shortener form.
mod platform;

pub use platform::app::run_app;
pub use platform::config::{
    build_shortener, load_config, AppConfig, ConfigError, CONFIG_FILENAME,
};
pub use platform::effects::EffectRunner;
pub use platform::ui::input::{map_key, map_paste, KeyAction};
pub use platform::ui::render::render;
