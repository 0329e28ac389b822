use std::collections::HashSet;

/// Normalization applied before tokenizing ementa text for the
/// analogous-matter check: lowercase, strip diacritics, strip
/// punctuation, collapse whitespace. The exact steps matter because the
/// similarity thresholds downstream are load-bearing business rules.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = true;
    for c in text.chars() {
        let c = strip_diacritic(c);
        for c in c.to_lowercase() {
            if c.is_alphanumeric() {
                out.push(c);
                last_was_space = false;
            } else if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

pub fn token_set(text: &str) -> HashSet<String> {
    normalize(text)
        .split_whitespace()
        .map(|t| t.to_string())
        .collect()
}

/// Jaccard similarity over normalized token sets. Two empty texts are
/// defined as identical (1.0).
pub fn jaccard(a: &str, b: &str) -> f64 {
    let sa = token_set(a);
    let sb = token_set(b);
    if sa.is_empty() && sb.is_empty() {
        return 1.0;
    }
    let intersection = sa.intersection(&sb).count();
    let union = sa.union(&sb).count();
    intersection as f64 / union as f64
}

/// Portuguese-relevant diacritic folding. Anything outside this table
/// passes through unchanged.
fn strip_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        _ => c,
    }
}
