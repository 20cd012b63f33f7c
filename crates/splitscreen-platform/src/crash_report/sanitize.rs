use regex::Regex;

/// Redacts URL query strings and credential-looking values.
///
/// Stream URLs routinely carry signed tokens in their query, so everything
/// after `?` is dropped. Bearer tokens and `key=`/`token=`/`sig=`-style
/// pairs outside URLs are replaced with `[REDACTED]` as well.
pub fn sanitize_urls(input: &str) -> String {
    // (pattern, replacement); URL queries first so the generic pass sees less.
    let patterns: &[(&str, &str)] = &[
        (r#"(https?://[^\s?#"']+)\?[^\s#"']*"#, "${1}?[REDACTED]"),
        (r"Bearer [a-zA-Z0-9._\-]+", "[REDACTED]"),
        (
            r"(?i)\b((?:key|token|secret|password|sig|signature)=)[^\s&]+",
            "${1}[REDACTED]",
        ),
    ];

    let mut result = input.to_string();
    for (pattern, replacement) in patterns {
        // Static literals, always valid.
        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(_) => continue,
        };
        result = re.replace_all(&result, *replacement).into_owned();
    }
    result
}
