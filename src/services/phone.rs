/// ASCII digits of `raw`, everything else dropped.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Display form for a phone input's current text. Never fails: a Russian
/// number (leading 7 or 8) becomes `+7 (XXX) XXX-XX-XX` once all 11 digits
/// are present and `+7 ` plus the digits typed so far before that. Other
/// numbers of up to 10 digits are shown as bare digits. Anything longer is
/// left as typed.
pub fn normalize_phone(raw: &str) -> String {
    let mut digits = digits(raw);

    if digits.starts_with('8') {
        digits.replace_range(..1, "7");
    }

    if digits.starts_with('7') && digits.len() <= 11 {
        if digits.len() == 11 {
            return format!(
                "+7 ({}) {}-{}-{}",
                &digits[1..4],
                &digits[4..7],
                &digits[7..9],
                &digits[9..11]
            );
        }
        return format!("+7 {}", &digits[1..]);
    }

    if digits.len() <= 10 {
        return digits;
    }

    raw.to_string()
}

/// Shape check only: 10 or 11 digits once everything else is stripped.
pub fn is_valid_phone(phone: &str) -> bool {
    matches!(digits(phone).len(), 10 | 11)
}
