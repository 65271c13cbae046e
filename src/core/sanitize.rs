// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Leading integer of a counter label, thousands separators allowed.
/// `"1,234"` → 1234, `"45 days"` → 45. `None` when no digit leads.
pub fn parse_separated_int(s: &str) -> Option<u32> {
    let s = s.trim();
    let mut digits = s!();
    for ch in s.chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            ',' => {}
            _ => break,
        }
    }
    if digits.is_empty() { return None; }
    digits.parse().ok()
}
