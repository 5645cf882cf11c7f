use quickopen_core::validator::{
    best_match, edit_distance, validate_with_pool, AppValidation, CandidatePool,
};

#[test]
fn edit_distance_matches_the_classic_example() {
    assert_eq!(edit_distance("kitten", "sitting"), 3);
}

#[test]
fn edit_distance_is_zero_on_identical_strings() {
    for s in ["", "a", "finder", "Visual Studio Code"] {
        assert_eq!(edit_distance(s, s), 0);
    }
}

#[test]
fn edit_distance_is_symmetric() {
    let pairs = [
        ("kitten", "sitting"),
        ("finder", "fidner"),
        ("", "abc"),
        ("open", "xdg-open"),
    ];
    for (left, right) in pairs {
        assert_eq!(edit_distance(left, right), edit_distance(right, left));
    }
}

#[test]
fn edit_distance_counts_from_empty() {
    assert_eq!(edit_distance("", "abc"), 3);
    assert_eq!(edit_distance("abc", ""), 3);
}

#[test]
fn exact_rule_beats_an_earlier_near_miss() {
    // "coda" comes first in enumeration order but only matches by distance;
    // the case-insensitive exact rule has higher priority.
    let candidates = ["coda", "Code"];
    assert_eq!(best_match("code", &candidates), Some("Code"));
}

#[test]
fn near_misses_match_within_distance_two() {
    let candidates = ["sublime"];
    assert_eq!(best_match("sublme", &candidates), Some("sublime"));
    assert_eq!(best_match("sublimee", &candidates), Some("sublime"));
}

#[test]
fn containment_matches_in_both_directions() {
    let candidates = ["docker"];
    assert_eq!(best_match("dock", &candidates), Some("docker"));

    let candidates = ["studio"];
    assert_eq!(best_match("visualstudiocode", &candidates), Some("studio"));
}

#[test]
fn containment_is_gated_to_three_characters() {
    let candidates = ["docker"];
    assert_eq!(best_match("do", &candidates), None);

    let candidates = ["sh"];
    assert_eq!(best_match("shells", &candidates), None);
}

#[test]
fn first_candidate_in_enumeration_order_wins_within_a_rule() {
    let candidates = ["gedit2", "gedit3"];
    assert_eq!(best_match("gedit", &candidates), Some("gedit2"));
}

#[test]
fn exact_executable_name_is_valid() {
    let pool = CandidatePool {
        bundles: Vec::new(),
        executables: vec!["code".to_string(), "vim".to_string()],
    };

    assert!(validate_with_pool("vim", &pool).is_valid());
}

#[test]
fn bundle_names_match_case_insensitively() {
    let pool = CandidatePool {
        bundles: vec!["Visual Studio Code".to_string()],
        executables: Vec::new(),
    };

    assert!(validate_with_pool("visual studio code", &pool).is_valid());
}

#[test]
fn near_miss_carries_a_suggestion() {
    let pool = CandidatePool {
        bundles: Vec::new(),
        executables: vec!["chrome".to_string()],
    };

    match validate_with_pool("chrme", &pool) {
        AppValidation::Invalid { message } => {
            assert!(message.contains("Did you mean 'chrome'"), "message: {message}");
        }
        AppValidation::Valid => panic!("misspelled name should not validate"),
    }
}

#[test]
fn blank_name_with_no_match_gets_the_generic_message() {
    let pool = CandidatePool::default();

    match validate_with_pool("   ", &pool) {
        AppValidation::Invalid { message } => {
            assert!(
                message.contains("Check that it is installed"),
                "message: {message}"
            );
            assert!(!message.contains("Did you mean"), "message: {message}");
        }
        AppValidation::Valid => panic!("blank name should not validate"),
    }
}

#[test]
fn unmatchable_name_gets_the_generic_message() {
    let pool = CandidatePool {
        bundles: Vec::new(),
        executables: vec!["vim".to_string()],
    };

    match validate_with_pool("qqqqqqqqqqqq", &pool) {
        AppValidation::Invalid { message } => {
            assert!(!message.contains("Did you mean"), "message: {message}");
        }
        AppValidation::Valid => panic!("unmatchable name should not validate"),
    }
}
