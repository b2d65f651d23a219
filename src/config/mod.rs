pub mod locale;
pub mod settings;

pub use locale::Locale;
pub use settings::AppConfig;
