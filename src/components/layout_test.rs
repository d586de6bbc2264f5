use super::*;

// =============================================================
// route_from_path
// =============================================================

#[test]
fn root_path_maps_to_dashboard() {
    assert_eq!(route_from_path("/"), "dashboard");
    assert_eq!(route_from_path(""), "dashboard");
}

#[test]
fn path_segments_strip_slashes() {
    assert_eq!(route_from_path("/fields"), "fields");
    assert_eq!(route_from_path("/fields/"), "fields");
}

// =============================================================
// title_for_route
// =============================================================

#[test]
fn title_capitalizes_the_route() {
    assert_eq!(title_for_route("dashboard"), "Dashboard");
}

#[test]
fn title_replaces_underscores_with_spaces() {
    assert_eq!(title_for_route("field_reports"), "Field Reports");
}

// =============================================================
// initials
// =============================================================

#[test]
fn initials_of_a_single_word_are_its_first_two_letters() {
    assert_eq!(initials("johndoe"), "JO");
}

#[test]
fn initials_of_multiple_words_use_first_and_last() {
    assert_eq!(initials("John Albert Doe"), "JD");
}

#[test]
fn initials_of_empty_username_is_a_question_mark() {
    assert_eq!(initials(""), "?");
}

#[test]
fn initials_of_a_one_letter_name() {
    assert_eq!(initials("j"), "J");
}
