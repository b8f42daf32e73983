//! Role-based navigation gate.
//!
//! [`decide_destination`] maps an [`AuthState`] and the section a viewer is in
//! to what should happen next. [`NavigationGate`] wraps it for long-lived
//! clients: it remembers where the viewer is and only acts when its inputs
//! change. The HTTP route guards in [`crate::middleware::role`] call the same
//! function, so the server and clients agree on who may see what.

use schoolhub_models::{AuthState, Role, Section};

/// Outcome of evaluating the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Session still resolving; render nothing.
    Hold,
    /// The viewer is where they belong.
    Stay,
    Redirect(Section),
}

/// Section a viewer belongs in, or `None` while the session is resolving.
///
/// An authenticated viewer without a role belongs on the login screen.
pub fn home_section(auth: &AuthState) -> Option<Section> {
    if auth.is_loading() {
        return None;
    }

    match (auth.is_authenticated(), auth.role()) {
        (true, Some(role)) => Some(Section::for_role(role)),
        _ => Some(Section::Login),
    }
}

pub fn decide_destination(auth: &AuthState, current: Section) -> Decision {
    match home_section(auth) {
        None => Decision::Hold,
        Some(home) if home == current => Decision::Stay,
        Some(home) => Decision::Redirect(home),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GateInput {
    loading: bool,
    authenticated: bool,
    role: Option<Role>,
    current: Section,
}

impl GateInput {
    fn of(auth: &AuthState, current: Section) -> Self {
        Self {
            loading: auth.is_loading(),
            authenticated: auth.is_authenticated(),
            role: auth.role(),
            current,
        }
    }
}

/// Stateful gate for a single viewer.
///
/// Call [`evaluate`](Self::evaluate) after every change to the session and
/// [`navigate`](Self::navigate) when the viewer moves. At most one redirect is
/// issued per distinct input; repeating an evaluation is a no-op.
#[derive(Debug, Clone)]
pub struct NavigationGate {
    current: Section,
    last_input: Option<GateInput>,
}

impl Default for NavigationGate {
    fn default() -> Self {
        Self::new(Section::Login)
    }
}

impl NavigationGate {
    pub fn new(initial: Section) -> Self {
        Self {
            current: initial,
            last_input: None,
        }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    /// Re-evaluates the gate, returning the section to redirect to, if any.
    pub fn evaluate(&mut self, auth: &AuthState) -> Option<Section> {
        let input = GateInput::of(auth, self.current);
        if self.last_input == Some(input) {
            return None;
        }
        self.last_input = Some(input);

        match decide_destination(auth, self.current) {
            Decision::Redirect(target) => {
                self.current = target;
                self.last_input = Some(GateInput::of(auth, target));
                Some(target)
            }
            Decision::Hold | Decision::Stay => None,
        }
    }

    /// Moves the viewer to `section`, then re-evaluates.
    pub fn navigate(&mut self, section: Section, auth: &AuthState) -> Option<Section> {
        self.current = section;
        self.evaluate(auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolhub_models::Identity;
    use uuid::Uuid;

    fn signed_in(role: Option<Role>) -> AuthState {
        AuthState::signed_in(Identity::new(Uuid::new_v4(), "u@school.test", "U", role))
    }

    #[test]
    fn test_loading_holds_everywhere() {
        for section in [Section::Login, Section::Student, Section::Admin] {
            assert_eq!(decide_destination(&AuthState::loading(), section), Decision::Hold);
        }
    }

    #[test]
    fn test_signed_out_goes_to_login() {
        let state = AuthState::signed_out();
        assert_eq!(decide_destination(&state, Section::Login), Decision::Stay);
        assert_eq!(
            decide_destination(&state, Section::Teacher),
            Decision::Redirect(Section::Login)
        );
    }

    #[test]
    fn test_each_role_lands_in_its_section() {
        for role in Role::ALL {
            let state = signed_in(Some(role));
            let home = Section::for_role(role);
            assert_eq!(decide_destination(&state, home), Decision::Stay);
            assert_eq!(decide_destination(&state, Section::Login), Decision::Redirect(home));
        }
    }

    #[test]
    fn test_missing_role_is_treated_as_signed_out() {
        let state = signed_in(None);
        assert_eq!(
            decide_destination(&state, Section::Student),
            Decision::Redirect(Section::Login)
        );
        assert_eq!(decide_destination(&state, Section::Login), Decision::Stay);
    }

    #[test]
    fn test_admin_in_student_section_redirected_once() {
        let state = signed_in(Some(Role::Admin));
        let mut gate = NavigationGate::new(Section::Student);

        assert_eq!(gate.evaluate(&state), Some(Section::Admin));
        assert_eq!(gate.current(), Section::Admin);
        assert_eq!(gate.evaluate(&state), None);
        assert_eq!(gate.evaluate(&state), None);
    }

    #[test]
    fn test_identical_inputs_produce_no_action() {
        let state = AuthState::signed_out();
        let mut gate = NavigationGate::new(Section::Teacher);

        assert_eq!(gate.evaluate(&state), Some(Section::Login));
        assert_eq!(gate.evaluate(&state), None);
    }

    #[test]
    fn test_session_lifecycle() {
        let mut gate = NavigationGate::default();

        assert_eq!(gate.evaluate(&AuthState::loading()), None);
        assert_eq!(gate.evaluate(&AuthState::resolved(None)), None);
        assert_eq!(gate.current(), Section::Login);

        let teacher = signed_in(Some(Role::Teacher));
        assert_eq!(gate.evaluate(&teacher), Some(Section::Teacher));

        // Wandering into another section bounces back.
        assert_eq!(gate.navigate(Section::Admin, &teacher), Some(Section::Teacher));
        assert_eq!(gate.navigate(Section::Teacher, &teacher), None);

        assert_eq!(gate.evaluate(&AuthState::signed_out()), Some(Section::Login));
    }

    #[test]
    fn test_resolution_from_loading_redirects_to_home() {
        let mut gate = NavigationGate::new(Section::Login);
        assert_eq!(gate.evaluate(&AuthState::loading()), None);
        assert_eq!(
            gate.evaluate(&AuthState::resolved(Some(Identity::new(
                Uuid::new_v4(),
                "s@school.test",
                "S",
                Some(Role::Student)
            )))),
            Some(Section::Student)
        );
    }
}
