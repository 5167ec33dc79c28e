use std::collections::HashSet;
use std::fs;

use campusgraph::algorithm::run_campus_pipeline;

const ROSTER: &str = "\
Alice|20|Female|2|CS|3.8|Bob|Google,Netflix
Bob|20|Male|2|CS|3.5|Alice|Google
Carol|21|Female|3|Math|3.9|Dan|Netflix
Dan|21|Male|3|Math|3.2|Carol|None
Erin|25|Female|4|History|3.7|None|None
";

fn write_roster(name: &str, contents: &str) -> String {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn full_run_matches_builds_and_partitions() {
    let path = write_roster("campusgraph_pipeline_roster.txt", ROSTER);
    let report = run_campus_pipeline(&path, 2).unwrap();

    assert_eq!(report.student_count, 5);
    // Two mutual first choices.
    assert_eq!(report.matched_count, 4);
    assert_eq!(
        report.roommate_pairs,
        vec![
            ("Alice".to_string(), "Bob".to_string()),
            ("Carol".to_string(), "Dan".to_string()),
        ]
    );

    // Pods partition the roster.
    let mut seen = HashSet::new();
    for pod in &report.pods {
        assert!(pod.len() <= 2);
        for member in pod {
            assert!(seen.insert(member.clone()));
        }
    }
    assert_eq!(seen.len(), 5);
    // Erin shares nothing and was never matched.
    assert!(report.pods.contains(&vec!["Erin".to_string()]));

    fs::remove_file(&path).ok();
}

#[test]
fn roommate_bonus_is_visible_in_the_graph_the_pods_use() {
    // Alice and Bob only connect through the matching bonus here: different
    // majors, different ages, no shared internships.
    let roster = "\
Alice|20|Female|2|CS|3.8|Bob|None
Bob|22|Male|2|Math|3.5|Alice|None
";
    let path = write_roster("campusgraph_pipeline_bonus.txt", roster);
    let report = run_campus_pipeline(&path, 2).unwrap();

    assert_eq!(report.matched_count, 2);
    assert_eq!(report.edge_count, 1);
    assert_eq!(report.pods, vec![vec!["Alice".to_string(), "Bob".to_string()]]);

    fs::remove_file(&path).ok();
}

#[test]
fn missing_roster_file_fails_with_context() {
    let err = run_campus_pipeline("/no/such/roster.txt", 4).unwrap_err();
    assert!(err.to_string().contains("/no/such/roster.txt"));
}

#[test]
fn malformed_roster_aborts_before_matching() {
    let path = write_roster(
        "campusgraph_pipeline_bad.txt",
        "Alice|20|Female|2|CS|3.8|None|None\nBob|oops",
    );
    let err = run_campus_pipeline(&path, 4).unwrap_err();
    assert!(err.to_string().contains("line 2"));
    fs::remove_file(&path).ok();
}
