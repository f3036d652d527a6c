//! 照合結果の表示

use resume_match_common::MatchRecord;

const RANK_HEADER: &str = "順位";
const FILENAME_HEADER: &str = "ファイル名";
const SIMILARITY_HEADER: &str = "類似度";

/// 照合結果をテキストの表にする
///
/// レスポンスの順序のまま1件1行。空なら空文字列。
pub fn render_table(matches: &[MatchRecord]) -> String {
    if matches.is_empty() {
        return String::new();
    }

    let name_width = matches
        .iter()
        .map(|m| display_width(&m.filename))
        .chain(std::iter::once(display_width(FILENAME_HEADER)))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}  {}\n",
        RANK_HEADER,
        pad(FILENAME_HEADER, name_width),
        SIMILARITY_HEADER
    ));

    for (i, record) in matches.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {}  {:>6}\n",
            i + 1,
            pad(&record.filename, name_width),
            record.similarity_display()
        ));
    }

    out
}

/// 全角文字を2桁として数える
fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table(&[]), "");
    }

    #[test]
    fn test_render_single_row() {
        let table = render_table(&[MatchRecord::new("a.pdf", 0.91)]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("ファイル名"));
        assert!(lines[1].contains("a.pdf"));
        assert!(lines[1].contains("0.91"));
    }

    #[test]
    fn test_render_keeps_response_order() {
        let table = render_table(&[
            MatchRecord::new("low.pdf", 0.12),
            MatchRecord::new("high.pdf", 0.98),
        ]);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[1].trim_start().starts_with("1"));
        assert!(lines[1].contains("low.pdf"));
        assert!(lines[2].contains("high.pdf"));
        assert!(lines[2].contains("0.98"));
    }

    #[test]
    fn test_columns_aligned() {
        let table = render_table(&[
            MatchRecord::new("a.pdf", 0.5),
            MatchRecord::new("very-long-name.docx", 0.25),
        ]);
        let lines: Vec<&str> = table.lines().collect();

        // 類似度列の終端が揃う
        assert_eq!(display_width(lines[1]), display_width(lines[2]));
    }

    #[test]
    fn test_display_width_wide_chars() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("履歴書"), 6);
        assert_eq!(pad("履歴書", 8), "履歴書  ");
    }
}
