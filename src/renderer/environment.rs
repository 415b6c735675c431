//! The template environment every template is compiled in.

use crate::renderer::helpers;
use cruet::{
    case::{
        camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
        screaming_snake::to_screaming_snake_case, snake::to_snake_case,
        train::to_train_case,
    },
    string::{pluralize::to_plural, singularize::to_singular},
};
use log::warn;
use minijinja::value::ValueKind;
use minijinja::{escape_formatter, AutoEscape, Environment, Error, Output, State, Value};
use regex::Regex;

/// Tests whether `val` matches the regular expression `re`.
///
/// An invalid expression never matches and is logged.
pub fn regex_filter(val: &str, re: &str) -> bool {
    match Regex::new(re) {
        Ok(re) => re.is_match(val),
        Err(err) => {
            warn!("Invalid regex '{re}': {err}");
            false
        }
    }
}

/// Formats booleans as `true`/`false`, everything else as minijinja does.
pub fn value_formatter(out: &mut Output, state: &State, value: &Value) -> Result<(), Error> {
    if value.kind() == ValueKind::Bool {
        out.write_str(if value.is_true() { "true" } else { "false" })?;
        return Ok(());
    }
    escape_formatter(out, state, value)
}

/// Creates the environment with the text helpers and the job helper set.
///
/// Outputs are YAML, Go or Markdown, so auto-escaping is off for every
/// template name, and template trailing newlines are kept.
pub fn new_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env.set_formatter(value_formatter);

    env.add_filter("camel_case", to_camel_case);
    env.add_filter("kebab_case", to_kebab_case);
    env.add_filter("pascal_case", to_pascal_case);
    env.add_filter("screaming_snake_case", to_screaming_snake_case);
    env.add_filter("snake_case", to_snake_case);
    env.add_filter("train_case", to_train_case);
    env.add_filter("plural", to_plural);
    env.add_filter("singular", to_singular);
    env.add_filter("regex", regex_filter);

    helpers::register_all(&mut env);
    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(template: &str, ctx: serde_json::Value) -> String {
        new_environment().render_str(template, ctx).unwrap()
    }

    #[test]
    fn test_case_filters() {
        assert_eq!(render("{{ 'hello world' | kebab_case }}", json!({})), "hello-world");
        assert_eq!(render("{{ 'hello world' | snake_case }}", json!({})), "hello_world");
        assert_eq!(render("{{ 'hello world' | screaming_snake_case }}", json!({})), "HELLO_WORLD");
        assert_eq!(render("{{ 'cars' | singular }}", json!({})), "car");
    }

    #[test]
    fn test_regex_filter() {
        assert!(regex_filter("release-1.20", r"^release-\d+\.\d+$"));
        assert!(!regex_filter("main", r"^release-"));
        assert!(!regex_filter("anything", r"([unclosed"));
        assert_eq!(render("{{ 'pre-main' | regex('^pre-') }}", json!({})), "true");
    }

    #[test]
    fn test_output_is_not_escaped() {
        let rendered = new_environment()
            .template_from_named_str("job.yaml", "cmd: {{ cmd }}")
            .unwrap()
            .render(json!({"cmd": "\"a\" && <b>"}))
            .unwrap();
        assert_eq!(rendered, "cmd: \"a\" && <b>");
    }

    #[test]
    fn test_booleans_render_lowercase() {
        assert_eq!(render("{{ true }} {{ false }}", json!({})), "true false");
        assert_eq!(
            render(
                "enabled: {{ Values.enabled }}\noptional: {{ Values.optional }}\n",
                json!({"Values": {"enabled": true, "optional": false}})
            ),
            "enabled: true\noptional: false\n"
        );
    }

    #[test]
    fn test_trailing_newline_is_kept() {
        assert_eq!(render("a: {{ b }}\n", json!({"b": 1})), "a: 1\n");
    }

    #[test]
    fn test_builtins_are_available() {
        assert_eq!(
            render("{% for r in releases | reverse %}{{ r | upper }}{% if not loop.last %},{% endif %}{% endfor %}", json!({"releases": ["a", "b"]})),
            "B,A"
        );
    }
}
