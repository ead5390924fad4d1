use super::*;

#[test]
fn input_attrs_match_field_kind() {
    assert_eq!(input_attrs(CredentialField::Username), ("text", "Name"));
    assert_eq!(input_attrs(CredentialField::Email), ("email", "Email"));
    assert_eq!(input_attrs(CredentialField::Password), ("password", "Password"));
}

#[test]
fn accent_classes_use_accent_colour() {
    assert!(Accent::Blue.input_class().contains("focus:ring-blue-500"));
    assert!(Accent::Purple.input_class().contains("focus:ring-purple-500"));
    assert!(Accent::Blue.primary_button_class().contains("bg-blue-600"));
    assert!(Accent::Purple.primary_button_class().contains("bg-purple-600"));
}

#[test]
fn page_gradients_differ_per_accent() {
    assert_ne!(Accent::Blue.page_class(), Accent::Purple.page_class());
    assert!(Accent::Blue.page_class().contains("min-h-screen"));
}
