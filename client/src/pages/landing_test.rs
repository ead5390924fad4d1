use super::*;

#[test]
fn four_features_with_distinct_titles() {
    let mut titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(titles.len(), 4);
}

#[test]
fn feature_delays_stagger_by_200ms() {
    assert_eq!(feature_delay_style(0), "transition-delay: 0ms");
    assert_eq!(feature_delay_style(1), "transition-delay: 200ms");
    assert_eq!(feature_delay_style(3), "transition-delay: 600ms");
}

#[test]
fn reveal_class_starts_hidden() {
    assert!(reveal_class(false).contains("opacity-0"));
    assert!(reveal_class(true).contains("opacity-100"));
}

#[test]
fn footer_has_three_link_groups() {
    let headings: Vec<_> = FOOTER_GROUPS.iter().map(|(h, _)| *h).collect();
    assert_eq!(headings, ["Product", "Company", "Support"]);
    assert!(FOOTER_GROUPS.iter().all(|(_, links)| links.len() == 3));
}
