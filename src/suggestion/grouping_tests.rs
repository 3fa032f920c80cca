//! Tests for suggestion grouping

use super::*;
use insta::assert_snapshot;
use proptest::prelude::*;

fn suggestion(text: &str, group: Option<&str>) -> Suggestion {
    let s = Suggestion::text(text);
    match group {
        Some(g) => s.with_group(g),
        None => s,
    }
}

fn render(grouped: &GroupedSuggestions) -> String {
    let mut out = String::new();
    for group in &grouped.groups {
        out.push_str(&format!("[{}]\n", group.name));
        for (index, s) in &group.items {
            out.push_str(&format!("  {} {}\n", index, s.display_text));
        }
    }
    out
}

#[test]
fn test_empty_input_has_no_groups() {
    let grouped = group_suggestions(&[]);
    assert!(grouped.is_empty());
    assert_eq!(grouped.len(), 0);
}

#[test]
fn test_groups_in_first_seen_order() {
    let grouped = group_suggestions(&[
        suggestion("catalog", Some("Web")),
        suggestion("Cathy", Some("People")),
        suggestion("cat food", Some("Web")),
        suggestion("category", None),
    ]);

    assert_eq!(grouped.names(), vec!["Web", "People", DEFAULT_GROUP_NAME]);
    assert_eq!(grouped.len(), 4);
}

#[test]
fn test_flat_index_follows_presentation_order() {
    let grouped = group_suggestions(&[
        suggestion("a", Some("One")),
        suggestion("b", Some("Two")),
        suggestion("c", Some("One")),
    ]);

    let order: Vec<(usize, &str)> = grouped
        .iter()
        .map(|(i, s)| (i, s.display_text.as_str()))
        .collect();
    assert_eq!(order, vec![(0, "a"), (1, "c"), (2, "b")]);
    assert_eq!(grouped.get(1).map(|s| s.display_text.as_str()), Some("c"));
    assert!(grouped.get(3).is_none());
}

#[test]
fn test_blank_and_missing_groups_merge() {
    let grouped = group_suggestions(&[
        suggestion("a", None),
        suggestion("b", Some("  ")),
        suggestion("c", Some("")),
    ]);
    assert_eq!(grouped.groups.len(), 1);
    assert_eq!(grouped.groups[0].name, DEFAULT_GROUP_NAME);
}

#[test]
fn snapshot_grouped_listing() {
    let grouped = group_suggestions(&[
        suggestion("<B>cat</B>alog", Some("Web")),
        suggestion("Cathy Smith", Some("People")),
        suggestion("<B>cat</B> food", Some("Web")),
        suggestion("cat videos", None),
    ]);

    assert_snapshot!(render(&grouped), @r"
    [Web]
      0 <B>cat</B>alog
      1 <B>cat</B> food
    [People]
      2 Cathy Smith
    [Suggestions]
      3 cat videos
    ");
}

// For any interleaving of group names, each group is contiguous in the
// presentation order, groups appear in first-occurrence order and items keep
// their relative input order.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_grouping_is_stable(
        groups in prop::collection::vec(prop::sample::select(vec!["A", "B", "C", ""]), 0..30)
    ) {
        let input: Vec<Suggestion> = groups
            .iter()
            .enumerate()
            .map(|(i, g)| suggestion(&i.to_string(), Some(g)))
            .collect();
        let grouped = group_suggestions(&input);

        // First-occurrence order
        let mut expected_names: Vec<&str> = Vec::new();
        for s in &input {
            let name = s.effective_group();
            if !expected_names.contains(&name) {
                expected_names.push(name);
            }
        }
        prop_assert_eq!(grouped.names(), expected_names);

        // Nothing lost, indices contiguous
        prop_assert_eq!(grouped.len(), input.len());
        let indices: Vec<usize> = grouped.iter().map(|(i, _)| i).collect();
        prop_assert_eq!(indices, (0..input.len()).collect::<Vec<_>>());

        // Within-group arrival order
        for group in &grouped.groups {
            let positions: Vec<usize> = group
                .items
                .iter()
                .map(|(_, s)| s.display_text.parse::<usize>().unwrap())
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            prop_assert_eq!(positions, sorted);
        }
    }
}
