use flockbook::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

/// Config problems go to stderr so `--json` output stays parseable.
pub fn print_config_warnings(warnings: &[ConfigWarning], supports_unicode: bool) {
    for w in warnings {
        eprintln!("{} {}", Icon::Warning.render(supports_unicode), w);
    }
}

/// Referential misses are not errors; the store ignores them and we say so.
pub fn print_warning(message: &str, supports_color: bool, supports_unicode: bool) {
    eprintln!(
        "{} {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        message
    );
}
