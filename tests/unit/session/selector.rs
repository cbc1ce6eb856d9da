use super::*;

#[test]
fn defaults_to_the_scripted_backend() {
    let selector = BackendSelector::default();
    assert_eq!(selector.active(), BackendKind::Scripted);
    assert!(!selector.is_module_active());
}

#[test]
fn toggle_flips_between_the_two_kinds() {
    let mut selector = BackendSelector::default();
    assert_eq!(selector.toggle(), BackendKind::Module);
    assert!(selector.is_module_active());
    assert_eq!(selector.toggle(), BackendKind::Scripted);
    assert!(!selector.is_module_active());
}
