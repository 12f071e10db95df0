//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Tickerdock Configuration
# Only override what you want to change -- missing fields use defaults.

[window]
# width = 400            # rewritten on resize
# height = 600           # rewritten on resize
# min_width = 300
# min_height = 400
# title = "Tickerdock"

[crop]
# top = 182              # pixels of page chrome hidden at the top
# bottom = 88            # pixels hidden at the bottom

[page]
# url = "https://i.jzj9999.com/quoteh5/"
# user_agent = "Mozilla/5.0 (mobile)"

[dock]
# enabled = true
# top_threshold = 5      # top-edge Y at or below which collapse triggers
# release_margin = 40    # drag past threshold + margin to expand
# collapsed_height = 100
# drag_settle_polls = 6
# collapse_cooldown_polls = 10
# expand_cooldown_polls = 10
# poll_interval_ms = 50

[logging]
# level = "info"         # debug, info, warn, error
"##
    .to_string()
}
