use super::*;

#[test]
fn title_state_default() {
    assert_eq!(TitleState::default().title, "My Title");
}

#[test]
fn set_title_replaces_value() {
    let mut state = TitleState::default();
    state.set_title("Sign in");
    assert_eq!(state.title, "Sign in");
    state.set_title(String::from("Home"));
    assert_eq!(state.title, "Home");
}
