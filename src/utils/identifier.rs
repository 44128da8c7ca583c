use crate::core::User;

/// Keep only the ASCII digits of a personal identifier, in order.
///
/// An empty result means the identifier is invalid; callers decide how to
/// report it.
///
/// # Examples
/// ```
/// use checking_ledger::utils::normalize_id;
/// assert_eq!(normalize_id("123.456.789-00"), "12345678900");
/// assert_eq!(normalize_id("abc"), "");
/// ```
pub fn normalize_id(raw: &str) -> String {
    raw.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

/// First user whose identifier matches `id` once normalized
pub fn find_user<'a>(users: &'a [User], id: &str) -> Option<&'a User> {
    let id = normalize_id(id);
    users.iter().find(|user| user.get_personal_id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_keeps_digit_order() {
        assert_eq!(normalize_id("  987 654-321/0 "), "9876543210");
        assert_eq!(normalize_id(""), "");
        assert_eq!(normalize_id("--./"), "");
    }

    #[test]
    fn test_find_user_normalizes_query() {
        let users = vec![
            User::new("Ana", "01/01/1990", normalize_id("111.111.111-11"), "Rua A"),
            User::new("Bruno", "02/02/1985", normalize_id("222.222.222-22"), "Rua B"),
        ];

        let found = find_user(&users, "222 222 222 22").unwrap();
        assert_eq!(found.get_full_name(), "Bruno");
        assert!(find_user(&users, "333").is_none());
        // Empty identifier never matches a registered user.
        assert!(find_user(&users, "x").is_none());
    }
}
