//! Human-readable activity names

/// Turn an activity label into a display name
///
/// Underscores become spaces and every word is title-cased, so
/// `"STAIRS_UP"` becomes `"Stairs Up"`.
pub fn format_activity(activity: &str) -> String {
    let mut out = String::with_capacity(activity.len());
    let mut prev_cased = false;
    for c in activity.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(c);
            prev_cased = false;
        }
    }
    out
}
