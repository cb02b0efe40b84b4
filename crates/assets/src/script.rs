use serde::{Deserialize, Serialize};

/// Contents written by "New File" on a script component.
pub const DEFAULT_SCRIPT: &str = "--Default Lua Script

function OnInit()
end

function OnUpdate(dt)
end

function OnCleanUp()
end
";

/// Metadata extracted from a script file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptInfo {
    pub path: String,
    /// Global function names, in declaration order.
    pub functions: Vec<String>,
    pub errors: Vec<String>,
}

impl ScriptInfo {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Scan Lua source for declared functions and unbalanced blocks.
///
/// This is a lexical pass only: comments are stripped, string contents are
/// not. Good enough to list entry points and catch a missing `end`.
pub fn scan_script(path: &str, source: &str) -> ScriptInfo {
    let mut functions = Vec::new();
    let mut errors = Vec::new();
    let mut depth: i64 = 0;

    for (number, raw) in source.lines().enumerate() {
        let line = raw.split("--").next().unwrap_or_default();

        if let Some(rest) = line.trim_start().strip_prefix("function ") {
            if let Some(name) = rest.split('(').next().map(str::trim) {
                if !name.is_empty() && !name.contains(' ') {
                    functions.push(name.to_string());
                }
            }
        }

        for word in line.split(|c: char| !(c.is_alphanumeric() || c == '_')) {
            match word {
                "function" | "if" | "do" | "repeat" => depth += 1,
                "end" | "until" => depth -= 1,
                _ => {}
            }
        }
        if depth < 0 {
            errors.push(format!("{path}:{}: unexpected 'end'", number + 1));
            depth = 0;
        }
    }

    if depth > 0 {
        errors.push(format!("{path}: {depth} block(s) missing 'end'"));
    }

    ScriptInfo {
        path: path.to_string(),
        functions,
        errors,
    }
}
