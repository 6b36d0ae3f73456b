/// Resolve the district selection after the district list changes.
///
/// Keeps `current` when the new list still contains it, otherwise falls
/// back to the list head, and to the empty string when the list itself
/// is empty. The caller treats an empty string as "nothing selected".
pub fn resolve_district(districts: &[String], current: &str) -> String {
    if districts.iter().any(|d| d == current) {
        return current.to_string();
    }
    districts.first().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::resolve_district;

    fn districts(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_current_district_is_kept_when_still_listed() {
        let list = districts(&["Pune", "Satara", "Nashik"]);
        assert_eq!(resolve_district(&list, "Satara"), "Satara");
    }

    #[test]
    fn test_unlisted_district_falls_back_to_list_head() {
        let list = districts(&["Pune", "Satara"]);
        assert_eq!(resolve_district(&list, "Gaya"), "Pune");
        assert_eq!(resolve_district(&list, ""), "Pune");
    }

    #[test]
    fn test_empty_list_clears_the_selection() {
        assert_eq!(resolve_district(&[], "Pune"), "");
    }
}
