//! JLPT vocabulary CSV parsing
//!
//! Expected columns: `expression,reading,meaning,tags` (column order is read
//! from the header; `tags` is ignored).

use super::{VocabError, Word};

/// Split one CSV line, honoring quoted fields and `""` escapes
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    fields.push(current);
    fields
}

/// Cut `s` at the first occurrence of any of `markers`
fn cut_at_first<'a>(s: &'a str, markers: &[char]) -> &'a str {
    match s.find(markers) {
        Some(idx) => &s[..idx],
        None => s,
    }
}

/// Normalize a reading to the kana that goes into the grid
///
/// "そうじ (する)" -> "そうじ", "あう; あいます" -> "あう", "～がつ" -> "がつ"
pub fn normalize_kana(input: &str) -> String {
    let base = cut_at_first(input, &['(', '（']);
    let base = cut_at_first(base, &[';', '；']);
    let base: String = base.chars().filter(|c| !matches!(c, '~' | '～')).collect();
    base.trim().to_string()
}

fn contains_katakana(s: &str) -> bool {
    s.chars().any(|c| ('\u{30A1}'..='\u{30F3}').contains(&c))
}

/// Parse a JLPT vocabulary CSV into words
///
/// Rows with too few columns, an empty reading or a katakana reading are
/// skipped. A missing required header column is an error.
pub fn parse_jlpt_csv(text: &str) -> Result<Vec<Word>, VocabError> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.len() <= 1 {
        return Ok(Vec::new());
    }

    let header = split_csv_line(lines[0]);
    let column = |name: &str| header.iter().position(|h| h.trim() == name);
    let (Some(expression_idx), Some(reading_idx), Some(meaning_idx)) =
        (column("expression"), column("reading"), column("meaning"))
    else {
        return Err(VocabError::Header);
    };
    let min_columns = expression_idx.max(reading_idx).max(meaning_idx) + 1;

    let mut words = Vec::new();
    for (i, line) in lines.iter().enumerate().skip(1) {
        let cols = split_csv_line(line);
        if cols.len() < min_columns {
            log::debug!("Skipping short CSV row {}: {:?}", i, line);
            continue;
        }

        let reading = normalize_kana(&cols[reading_idx]);
        if reading.is_empty() || contains_katakana(&reading) {
            continue;
        }

        words.push(Word::new(
            format!("word-{i}"),
            reading,
            cols[expression_idx].as_str(),
            cols[meaning_idx].as_str(),
        ));
    }

    Ok(words)
}
