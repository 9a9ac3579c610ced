//! # Output Configuration
//!
//! Decides whether CLI messages carry emoji markers or plain bracketed tags.
//! `--color=always|never` wins outright; `auto` honors `NO_COLOR` and
//! otherwise asks `console` whether stdout is a color-capable terminal.

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from the `--color` flag value.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self {
            use_color: resolve_color(color_flag, no_color, || {
                console::Term::stdout().features().colors_supported()
            }),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// `terminal_supports_color` is only consulted in `auto` mode without
/// `NO_COLOR`.
fn resolve_color(flag: &str, no_color: bool, terminal_supports_color: impl FnOnce() -> bool) -> bool {
    if flag.eq_ignore_ascii_case("always") {
        true
    } else if flag.eq_ignore_ascii_case("never") || no_color {
        false
    } else {
        terminal_supports_color()
    }
}

/// The emoji when colors are enabled, the plain tag otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}
