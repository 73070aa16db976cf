//! MiniJinja filter registration for page templates.

use minijinja::{Environment, Value};

use crate::games::GameId;

/// Registers the page filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    // {{ game.id | short_id }} -> "dummy-12..."
    env.add_filter("short_id", |value: Value| -> String {
        GameId::new(value.to_string()).short()
    });

    // {{ "list-item-bg" | css_var }} -> "var(--list-item-bg)"
    env.add_filter("css_var", |name: String| -> String {
        format!("var(--{})", name)
    });
}
