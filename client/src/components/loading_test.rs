use super::*;

#[test]
fn spinner_defaults_are_medium_indigo() {
    assert_eq!(SpinnerSize::default(), SpinnerSize::Md);
    assert_eq!(SpinnerColor::default(), SpinnerColor::Indigo);
    assert_eq!(SkeletonKind::default(), SkeletonKind::Text);
}

#[test]
fn spinner_size_classes_grow() {
    assert_eq!(SpinnerSize::Xs.spinner_class(), "w-4 h-4");
    assert_eq!(SpinnerSize::Md.spinner_class(), "w-8 h-8");
    assert_eq!(SpinnerSize::Xl.spinner_class(), "w-16 h-16");
}

#[test]
fn dots_are_smaller_than_spinner_of_same_size() {
    assert_eq!(SpinnerSize::Xs.dot_class(), "w-2 h-2");
    assert_eq!(SpinnerSize::Md.dot_class(), "w-4 h-4");
    assert_eq!(SpinnerSize::Md.spinner_class(), "w-8 h-8");
    assert_eq!(SpinnerSize::Xl.dot_class(), "w-8 h-8");
}

#[test]
fn colour_classes_share_shade() {
    assert_eq!(SpinnerColor::Purple.text_class(), "text-purple-600");
    assert_eq!(SpinnerColor::Purple.bg_class(), "bg-purple-600");
    assert_eq!(SpinnerColor::White.text_class(), "text-white");
    assert_eq!(SpinnerColor::White.bg_class(), "bg-white");
}

#[test]
fn dots_are_staggered_by_150ms() {
    assert_eq!(DOT_DELAYS_MS, [0, 150, 300]);
}

#[test]
fn skeleton_line_widths_stay_in_range() {
    for index in 0..200 {
        let width = skeleton_line_width(index);
        assert!((60..=100).contains(&width), "line {index}: {width}");
    }
}

#[test]
fn skeleton_line_widths_vary() {
    let widths: Vec<_> = (0..5).map(skeleton_line_width).collect();
    assert!(widths.windows(2).any(|w| w[0] != w[1]));
}
