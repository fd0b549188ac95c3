//! Comma splitting for direct entries

/// Split on commas, keeping quoted segments whole
///
/// Unquoted segments are trimmed and dropped when empty. A segment that opens
/// with `'` or `"` runs to the matching quote, commas included, and the quotes
/// are removed. An unterminated quote is kept as literal text.
pub fn split_direct(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut args = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        if i >= chars.len() {
            break;
        }

        let quote = chars[i];
        let closing = if quote == '\'' || quote == '"' {
            chars[i + 1..].iter().position(|&c| c == quote).map(|p| i + 1 + p)
        } else {
            None
        };

        let (mut arg, next) = match closing {
            Some(end) => (chars[i + 1..end].iter().collect::<String>(), end + 1),
            None => (String::new(), i),
        };

        let rest_end = chars[next..]
            .iter()
            .position(|&c| c == ',')
            .map_or(chars.len(), |p| next + p);
        let rest: String = chars[next..rest_end].iter().collect();
        arg.push_str(rest.trim());

        if closing.is_some() || !arg.is_empty() {
            args.push(arg);
        }
        i = rest_end + 1;
    }

    args
}
