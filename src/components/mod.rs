mod input;
mod style_host;

pub use input::Input;
pub use style_host::StyleHost;
