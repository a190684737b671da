/// Keyboard state relevant to the selection toolbar, independent of the
/// event type that carried it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Cancel,
    Share,
}

/// Escape cancels a selection; Ctrl/Cmd+Shift+S shares it unless a share is
/// already running.
pub fn shortcut_for(press: &KeyPress, selected_count: usize, is_loading: bool) -> Option<Shortcut> {
    if selected_count == 0 {
        return None;
    }
    if press.key == "Escape" {
        return Some(Shortcut::Cancel);
    }
    let is_share_combo =
        (press.ctrl || press.meta) && press.shift && press.key.eq_ignore_ascii_case("s");
    if is_share_combo && !is_loading {
        return Some(Shortcut::Share);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: &str, ctrl: bool, meta: bool, shift: bool) -> KeyPress {
        KeyPress {
            key: key.to_string(),
            ctrl,
            meta,
            shift,
        }
    }

    #[test]
    fn escape_cancels_only_with_a_selection() {
        let esc = press("Escape", false, false, false);
        assert_eq!(shortcut_for(&esc, 2, false), Some(Shortcut::Cancel));
        assert_eq!(shortcut_for(&esc, 0, false), None);
    }

    #[test]
    fn share_combo_accepts_ctrl_or_meta() {
        assert_eq!(
            shortcut_for(&press("S", true, false, true), 1, false),
            Some(Shortcut::Share)
        );
        assert_eq!(
            shortcut_for(&press("s", false, true, true), 1, false),
            Some(Shortcut::Share)
        );
        assert_eq!(shortcut_for(&press("s", true, false, false), 1, false), None);
    }

    #[test]
    fn share_combo_ignored_while_loading() {
        assert_eq!(shortcut_for(&press("s", true, false, true), 1, true), None);
    }
}
