/*!
 * Tests for the language menu
 */

use ytsubtrans::language_utils::{Language, get_language_name};

#[test]
fn test_menu_shouldListFiveLanguagesInOrder() {
    let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
    assert_eq!(codes, vec!["ml", "ta", "te", "hi", "en"]);
    assert_eq!(Language::default(), Language::Malayalam);
}

#[test]
fn test_fromCode_menuLabel_shouldNotParse() {
    // Only codes are submitted; labels are for display
    assert!(Language::from_code("Malayalam (ml)").is_none());
    assert_eq!(Language::from_code("EN"), Some(Language::English));
}

#[test]
fn test_getLanguageName_shouldResolveIsoCodes() {
    assert_eq!(get_language_name("ml").unwrap(), "Malayalam");
    assert_eq!(get_language_name("ta").unwrap(), "Tamil");
    assert!(get_language_name("zz").is_err());
}
