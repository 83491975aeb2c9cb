use std::sync::OnceLock;

use regex::{Captures, Regex};

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{ env.NAME }}` or `{{ env.NAME | default("value") }}`
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
    })
}

/// Substitute `{{ env.NAME }}` placeholders in raw config text
///
/// `{{ env.NAME | default("value") }}` falls back to `value` when `NAME` is
/// unset. Comment lines are copied unchanged, so a commented-out placeholder
/// never requires its variable.
pub fn expand_env(input: &str) -> anyhow::Result<String> {
    let mut lines = Vec::new();

    for line in input.split('\n') {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
            continue;
        }

        let mut expanded = String::with_capacity(line.len());
        let mut copied_to = 0;

        for captures in placeholder().captures_iter(line) {
            let Some(whole) = captures.get(0) else {
                continue;
            };

            expanded.push_str(&line[copied_to..whole.start()]);
            expanded.push_str(&resolve(&captures)?);
            copied_to = whole.end();
        }

        expanded.push_str(&line[copied_to..]);
        lines.push(expanded);
    }

    Ok(lines.join("\n"))
}

fn resolve(captures: &Captures<'_>) -> anyhow::Result<String> {
    let key = captures.get(1).map_or("", |m| m.as_str());
    let fallback = captures.get(2).map(|m| m.as_str());

    let Some(name) = key.strip_prefix("env.").filter(|name| !name.contains('.')) else {
        anyhow::bail!("only variables scoped with 'env.' are supported: `{key}`");
    };

    match (std::env::var(name), fallback) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(fallback)) => Ok(fallback.to_owned()),
        (Err(_), None) => anyhow::bail!("environment variable not found: `{name}`"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let input = "[discovery]\nversion = \"2019-04-30\"\n";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn substitutes_variable() {
        temp_env::with_var("WATSON_TEST_URL", Some("https://example.com"), || {
            let result = expand_env("url = \"{{ env.WATSON_TEST_URL }}\"").unwrap();
            assert_eq!(result, "url = \"https://example.com\"");
        });
    }

    #[test]
    fn substitutes_several_on_one_line() {
        let vars = [("WATSON_HOST", Some("example.com")), ("WATSON_PATH", Some("instances/1"))];
        temp_env::with_vars(vars, || {
            let result = expand_env("url = \"https://{{ env.WATSON_HOST }}/{{env.WATSON_PATH}}\"").unwrap();
            assert_eq!(result, "url = \"https://example.com/instances/1\"");
        });
    }

    #[test]
    fn missing_variable_is_an_error() {
        temp_env::with_var_unset("WATSON_MISSING", || {
            let err = expand_env("version = \"{{ env.WATSON_MISSING }}\"").unwrap_err();
            assert!(err.to_string().contains("WATSON_MISSING"));
        });
    }

    #[test]
    fn default_applies_only_when_unset() {
        temp_env::with_var_unset("WATSON_VERSION", || {
            let result = expand_env("version = \"{{ env.WATSON_VERSION | default(\"2023-03-31\") }}\"").unwrap();
            assert_eq!(result, "version = \"2023-03-31\"");
        });

        temp_env::with_var("WATSON_VERSION", Some("2019-04-30"), || {
            let result = expand_env("version = \"{{ env.WATSON_VERSION | default(\"2023-03-31\") }}\"").unwrap();
            assert_eq!(result, "version = \"2019-04-30\"");
        });
    }

    #[test]
    fn empty_default() {
        temp_env::with_var_unset("WATSON_EMPTY", || {
            let result = expand_env("value = \"{{ env.WATSON_EMPTY | default(\"\") }}\"").unwrap();
            assert_eq!(result, "value = \"\"");
        });
    }

    #[test]
    fn rejects_other_scopes() {
        let err = expand_env("url = \"{{ vars.URL }}\"").unwrap_err();
        assert!(err.to_string().contains("only variables scoped with 'env.'"));

        let err = expand_env("url = \"{{ env.A.B }}\"").unwrap_err();
        assert!(err.to_string().contains("env.A.B"));
    }

    #[test]
    fn comments_are_not_expanded() {
        temp_env::with_var_unset("WATSON_MISSING", || {
            let input = "  # url = \"{{ env.WATSON_MISSING }}\"\nversion = \"2019-04-30\"";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }
}
