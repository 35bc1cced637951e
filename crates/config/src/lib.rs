// Configuration loading

pub mod layout;
pub mod settings;

pub use layout::DataLayout;
pub use settings::Settings;
