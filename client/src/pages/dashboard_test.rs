use super::*;

#[test]
fn stats_are_all_positive_placeholders() {
    assert_eq!(STATS.len(), 4);
    assert!(STATS.iter().all(|s| s.change_type == ChangeType::Positive));
    assert!(STATS.iter().all(|s| s.change.starts_with('+')));
}

#[test]
fn change_type_colours() {
    assert!(ChangeType::Positive.class().contains("text-green-600"));
    assert!(ChangeType::Negative.class().contains("text-red-600"));
}

#[test]
fn status_labels_match_badges() {
    assert_eq!(ProjectStatus::InProgress.label(), "In Progress");
    assert!(ProjectStatus::Completed.badge_class().contains("bg-green-100"));
    assert!(ProjectStatus::InProgress.badge_class().contains("bg-blue-100"));
    assert!(ProjectStatus::Planning.badge_class().contains("bg-yellow-100"));
    assert!(ProjectStatus::Review.badge_class().contains("bg-purple-100"));
}

#[test]
fn completed_project_is_at_full_progress() {
    for project in RECENT_PROJECTS {
        if project.status == ProjectStatus::Completed {
            assert_eq!(project.progress, 100, "{}", project.name);
        }
    }
}

#[test]
fn progress_width_clamps_to_hundred() {
    assert_eq!(progress_width_style(0), "width: 0%");
    assert_eq!(progress_width_style(75), "width: 75%");
    assert_eq!(progress_width_style(100), "width: 100%");
    assert_eq!(progress_width_style(250), "width: 100%");
}

#[test]
fn members_label_pluralizes() {
    assert_eq!(members_label(1), "1 member");
    assert_eq!(members_label(4), "4 members");
    assert_eq!(members_label(0), "0 members");
}

#[test]
fn profile_counters_follow_stats() {
    assert_eq!(
        profile_counters(),
        [("Projects", "12"), ("Tasks", "28"), ("Completed", "156")]
    );
}

#[test]
fn quick_actions_in_order() {
    let labels: Vec<_> = QUICK_ACTIONS.iter().map(|action| action.label).collect();
    assert_eq!(labels, ["New Project", "Create Task", "Invite Team"]);
}

#[test]
fn quick_action_icons_share_tile_colour() {
    for action in QUICK_ACTIONS {
        let colour = action.icon_class.trim_start_matches("w-4 h-4 text-").trim_end_matches("-600");
        assert!(action.tile_class.contains(&format!("bg-{colour}-100")), "{}", action.label);
    }
}
