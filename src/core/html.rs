// src/core/html.rs

// Tolerant, case-insensitive scanners for the two shapes the pipeline needs:
// one <select> located by id, and its <option> children's attributes.
// Byte offsets in the lowered copy line up with the original because only
// ASCII case is folded.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Inner content of `<select ... id="wanted">…</select>`, or None if no
/// select carries that id.
pub fn find_select_by_id<'a>(doc: &'a str, id: &str) -> Option<&'a str> {
    let lc = to_lower(doc);
    let mut from = 0usize;
    while let Some(rel) = lc[from..].find("<select") {
        let start = from + rel;
        let open_end = doc[start..].find('>')? + start;
        let attrs = &doc[start + "<select".len()..open_end];
        if attr_value(attrs, "id").as_deref() == Some(id) {
            let inner_start = open_end + 1;
            let close_rel = lc[inner_start..].find("</select")?;
            return Some(&doc[inner_start..inner_start + close_rel]);
        }
        from = open_end + 1;
    }
    None
}

/// `(label, value)` attribute pairs of every `<option>` opener, in document
/// order. Missing attributes come back as None; the caller decides what to
/// skip.
pub fn list_options(select_inner: &str) -> Vec<(Option<String>, Option<String>)> {
    let lc = to_lower(select_inner);
    let mut out = Vec::new();
    let mut from = 0usize;
    while let Some(rel) = lc[from..].find("<option") {
        let start = from + rel;
        let open_end = match select_inner[start..].find('>') {
            Some(e) => start + e,
            None => break, // truncated opener; nothing more to read
        };
        let attrs = &select_inner[start + "<option".len()..open_end];
        out.push((attr_value(attrs, "label"), attr_value(attrs, "value")));
        from = open_end + 1;
    }
    out
}

/// Extract one attribute value from a tag opener's attribute text.
/// Handles double-quoted, single-quoted and bare values, any attribute
/// order, and requires a whitespace boundary so `id=` does not match
/// inside `data-id=`.
pub fn attr_value(attrs: &str, name: &str) -> Option<String> {
    let lc = to_lower(attrs);
    let needle = format!("{}=", to_lower(name));
    let mut from = 0usize;
    while let Some(rel) = lc[from..].find(&needle) {
        let at = from + rel;
        let boundary = at == 0 || lc.as_bytes()[at - 1].is_ascii_whitespace();
        if !boundary {
            from = at + needle.len();
            continue;
        }
        let val = attrs[at + needle.len()..].trim_start();
        let (quote, start_off) = match val.as_bytes().first() {
            Some(b'"') => ('"', 1),
            Some(b'\'') => ('\'', 1),
            _ => ('\0', 0),
        };
        let end = if quote != '\0' {
            val[start_off..].find(quote).map(|e| start_off + e)
        } else {
            val.find(|c: char| c.is_ascii_whitespace() || c == '>')
        }
        .unwrap_or(val.len());
        return Some(val[start_off..end].to_string());
    }
    None
}
