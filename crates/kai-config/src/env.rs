use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// An optional fallback is supported via `{{ env.VAR | default("value") }}`.
/// Lines starting with `#` (TOML comments) are passed through unchanged, so
/// commented-out secrets do not have to exist in the environment.
pub fn expand_env(input: &str) -> Result<String, String> {
    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        // Group 1: the scoped key (e.g. `env.VAR_NAME`)
        // Group 2: optional fallback inside default("...")
        RE.get_or_init(|| {
            Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
                .expect("must be valid regex")
        })
    }

    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut last_end = 0;
        for captures in re().captures_iter(line) {
            let overall = captures.get(0).unwrap();
            let key = captures.get(1).unwrap().as_str();
            let fallback = captures.get(2).map(|m| m.as_str());

            output.push_str(&line[last_end..overall.start()]);

            let Some(var_name) = key.strip_prefix("env.").filter(|rest| !rest.contains('.')) else {
                return Err(format!("only variables scoped with 'env.' are supported: `{key}`"));
            };

            match std::env::var(var_name) {
                Ok(value) => output.push_str(&value),
                Err(_) => match fallback {
                    Some(default) => output.push_str(default),
                    None => return Err(format!("environment variable not found: `{var_name}`")),
                },
            }

            last_end = overall.end();
        }
        output.push_str(&line[last_end..]);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
