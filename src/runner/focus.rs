//! Keyboard focus: which registered element, if any, currently receives
//! key events that aren't claimed by focus navigation itself.

/// Tracks the focus-eligible elements registered during the most recent
/// frame and which one (if any) currently holds focus.
///
/// Owned by whatever drives the event loop (typically a
/// [`super::TuiRunner`]) — there is no process-wide focus state, so
/// running two independent UIs in the same process never lets one
/// steal the other's focus.
#[derive(Debug, Default)]
pub struct FocusManager {
    elements: Vec<String>,
    focused: Option<String>,
    traps: Vec<Vec<String>>,
}

impl FocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registered element list for the current frame,
    /// preserving registration order. Called once per render before
    /// focus navigation is evaluated against it.
    pub fn set_elements(&mut self, elements: Vec<String>) {
        if let Some(focused) = &self.focused {
            if !elements.iter().any(|id| id == focused) {
                self.focused = None;
            }
        }
        self.elements = elements;
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused.as_deref() == Some(id)
    }

    /// Focus `id` if it is among the currently registered elements;
    /// otherwise a no-op, not an error, so that a stale id computed
    /// against a previous frame's element list silently fails to move
    /// focus rather than leaving it pointing at nothing.
    pub fn set_focus(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.elements.iter().any(|e| e == &id) {
            self.focused = Some(id);
        }
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    /// The ids eligible for focus navigation right now: the innermost
    /// active trap's scope if one exists, otherwise every registered
    /// element.
    fn scope(&self) -> &[String] {
        self.traps.last().map(Vec::as_slice).unwrap_or(&self.elements)
    }

    /// Move focus to the next eligible element, wrapping from the last
    /// back to the first. With nothing focused, focuses the first
    /// eligible element.
    pub fn focus_next(&mut self) {
        let scope = self.scope();
        if scope.is_empty() {
            self.focused = None;
            return;
        }
        let next = match &self.focused {
            Some(current) => {
                let position = scope.iter().position(|id| id == current);
                match position {
                    Some(i) => scope[(i + 1) % scope.len()].clone(),
                    None => scope[0].clone(),
                }
            }
            None => scope[0].clone(),
        };
        self.focused = Some(next);
    }

    /// Move focus to the previous eligible element, wrapping from the
    /// first back to the last.
    pub fn focus_previous(&mut self) {
        let scope = self.scope();
        if scope.is_empty() {
            self.focused = None;
            return;
        }
        let previous = match &self.focused {
            Some(current) => {
                let position = scope.iter().position(|id| id == current);
                match position {
                    Some(i) => scope[(i + scope.len() - 1) % scope.len()].clone(),
                    None => scope[scope.len() - 1].clone(),
                }
            }
            None => scope[scope.len() - 1].clone(),
        };
        self.focused = Some(previous);
    }

    /// Scope subsequent `focus_next`/`focus_previous` calls to `ids`
    /// until the matching [`Self::pop_focus_trap`] — a modal dialog's
    /// Tab cycle never escapes to the element underneath it.
    pub fn focus_trap(&mut self, ids: Vec<String>) {
        self.traps.push(ids);
    }

    pub fn pop_focus_trap(&mut self) {
        self.traps.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_next_wraps_around() {
        let mut focus = FocusManager::new();
        focus.set_elements(vec!["a".into(), "b".into(), "c".into()]);
        focus.set_focus("c");
        focus.focus_next();
        assert_eq!(focus.focused(), Some("a"));
    }

    #[test]
    fn focus_previous_wraps_around() {
        let mut focus = FocusManager::new();
        focus.set_elements(vec!["a".into(), "b".into(), "c".into()]);
        focus.set_focus("a");
        focus.focus_previous();
        assert_eq!(focus.focused(), Some("c"));
    }

    #[test]
    fn focus_next_with_nothing_focused_picks_first() {
        let mut focus = FocusManager::new();
        focus.set_elements(vec!["a".into(), "b".into()]);
        focus.focus_next();
        assert_eq!(focus.focused(), Some("a"));
    }

    #[test]
    fn set_focus_on_an_unknown_id_is_a_no_op() {
        let mut focus = FocusManager::new();
        focus.set_elements(vec!["a".into(), "b".into()]);
        focus.set_focus("a");
        focus.set_focus("nonexistent");
        assert_eq!(focus.focused(), Some("a"));
    }

    #[test]
    fn focus_is_cleared_when_its_element_disappears() {
        let mut focus = FocusManager::new();
        focus.set_elements(vec!["a".into(), "b".into()]);
        focus.set_focus("b");
        focus.set_elements(vec!["a".into()]);
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn focus_trap_scopes_navigation_to_its_ids() {
        let mut focus = FocusManager::new();
        focus.set_elements(vec!["a".into(), "b".into(), "c".into()]);
        focus.set_focus("a");
        focus.focus_trap(vec!["b".into(), "c".into()]);
        focus.focus_next();
        assert_eq!(focus.focused(), Some("b"));
        focus.focus_next();
        assert_eq!(focus.focused(), Some("c"));
        focus.focus_next();
        assert_eq!(focus.focused(), Some("b"));
        focus.pop_focus_trap();
        focus.set_focus("a");
        focus.focus_next();
        assert_eq!(focus.focused(), Some("b"));
    }
}
