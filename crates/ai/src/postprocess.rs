//! Shaping raw model output into tip lists.

/// Keep up to three bullet lines from raw model text, markers stripped.
///
/// A bullet line starts with `-`, `*`, or a digit followed by a dot. Models
/// occasionally wrap the list in prose; everything that is not a bullet is
/// dropped.
pub fn extract_tips(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && is_bullet(line))
        .take(3)
        .map(strip_marker)
        .collect()
}

fn is_bullet(line: &str) -> bool {
    if line.starts_with('-') || line.starts_with('*') {
        return true;
    }
    let mut chars = line.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(first), Some('.')) if first.is_ascii_digit()
    )
}

fn strip_marker(line: &str) -> String {
    line.trim_start_matches(|c: char| c == '-' || c == '*' || c == '.' || c.is_ascii_digit())
        .trim_start()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_bullets_and_drops_prose() {
        let raw = "- Cut prices\n* Restock soon\n1. Review margins\nrandom noise";
        assert_eq!(
            extract_tips(raw),
            vec!["Cut prices", "Restock soon", "Review margins"]
        );
    }

    #[test]
    fn caps_at_three_tips() {
        let raw = "- أ\n- ب\n- ج\n- د";
        assert_eq!(extract_tips(raw), vec!["أ", "ب", "ج"]);
    }

    #[test]
    fn numbers_inside_a_tip_survive_stripping() {
        assert_eq!(extract_tips("- خفض 3 أصناف"), vec!["خفض 3 أصناف"]);
    }

    #[test]
    fn plain_prose_yields_nothing() {
        assert!(extract_tips("ركز على التسويق هذا الأسبوع").is_empty());
        assert!(extract_tips("").is_empty());
    }

    #[test]
    fn digit_without_dot_is_not_a_bullet() {
        assert!(extract_tips("3 نصائح مهمة").is_empty());
    }
}
