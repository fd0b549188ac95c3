//! Entry shim template
//!
//! The shim is the receiving half of the transport encoding in
//! [`crate::codec::transport`] and the only place tokens are decoded. Decode
//! order: JSON, then Python literal, then one layer of surrounding quotes
//! stripped, then the plain string. Every tier that raises falls through to
//! the next, so input nested too deeply for the interpreter ends up as text.

const SHIM_TEMPLATE: &str = r#"# Generated by scriptdeck. Do not edit; changes are lost when the command is re-created.
import ast
import base64
import binascii
import json
import os
import runpy
import sys

SCRIPT = os.path.join(os.path.dirname(os.path.abspath(__file__)), __SCRIPT_FILE__)


def _decode(token):
    try:
        text = base64.b64decode(token.encode("ascii"), validate=True).decode("utf-8")
    except (binascii.Error, UnicodeError, ValueError):
        text = token
    try:
        return json.loads(text)
    except (ValueError, RecursionError):
        pass
    try:
        return ast.literal_eval(text.strip())
    except (ValueError, SyntaxError, TypeError, MemoryError, RecursionError):
        pass
    stripped = text.strip()
    if len(stripped) >= 2 and stripped[0] == stripped[-1] and stripped[0] in "'\"":
        return stripped[1:-1]
    return text


def _values(decoded):
    if isinstance(decoded, (list, tuple)):
        return list(decoded)
    if decoded == "":
        return []
    return [decoded]


values = _values(_decode(sys.argv[1])) if len(sys.argv) > 1 else []
sys.argv = [SCRIPT] + values
sys.path.insert(0, os.path.dirname(SCRIPT))
runpy.run_path(SCRIPT, run_name="__main__")
"#;

/// Render the entry shim for a user script file name
pub fn render_entry_shim(script_file_name: &str) -> String {
    // A JSON string literal is also a valid Python string literal.
    let literal = serde_json::to_string(script_file_name)
        .unwrap_or_else(|_| format!("\"{}\"", script_file_name.escape_default()));
    SHIM_TEMPLATE.replace("__SCRIPT_FILE__", &literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shim_embeds_script_name() {
        let shim = render_entry_shim("addone.py");
        assert!(shim.contains(r#"os.path.abspath(__file__)), "addone.py")"#));
        assert!(!shim.contains("__SCRIPT_FILE__"));
    }

    #[test]
    fn test_shim_escapes_quotes_in_name() {
        let shim = render_entry_shim("say \"hi\".py");
        assert!(shim.contains(r#""say \"hi\".py""#));
    }

    #[test]
    fn test_shim_decode_order() {
        let shim = render_entry_shim("x.py");
        let json = shim.find("json.loads(text)").unwrap();
        let literal = shim.find("ast.literal_eval").unwrap();
        let quotes = shim.find("stripped[1:-1]").unwrap();
        assert!(json < literal && literal < quotes);
    }

    #[test]
    fn test_shim_survives_deep_nesting() {
        let shim = render_entry_shim("x.py");
        assert!(shim.contains("except (ValueError, RecursionError):"));
        assert!(shim.contains("SyntaxError, TypeError, MemoryError, RecursionError"));
    }
}
