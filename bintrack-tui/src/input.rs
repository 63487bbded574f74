use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, MenuAction, Screen};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Action {
    None,
    Quit,
    /// Open the form for a menu entry (or run it when it takes no input)
    Select(MenuAction),
    /// Run the action whose form just completed
    Execute(MenuAction),
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Backspace, Char, Down, Enter, Esc, Up};

    // Global quit shortcut
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match app.screen {
        Screen::Menu => match key.code {
            Char('q') if key.modifiers.is_empty() => return Action::Quit,
            Up | Char('k') => {
                if app.menu_index > 0 {
                    app.menu_index -= 1;
                }
            }
            Down | Char('j') => {
                if app.menu_index + 1 < MenuAction::ALL.len() {
                    app.menu_index += 1;
                }
            }
            Enter | Char(' ') => {
                if let Some(action) = MenuAction::ALL.get(app.menu_index).copied() {
                    if action == MenuAction::Exit {
                        return Action::Quit;
                    }
                    return Action::Select(action);
                }
            }
            _ => {}
        },

        Screen::Form => match key.code {
            Char(character) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    app.push_input(character);
                }
            }
            Backspace => app.pop_input(),
            Enter => {
                if let Some(action) = app.commit_field() {
                    return Action::Execute(action);
                }
            }
            Esc => app.cancel_form(),
            _ => {}
        },

        Screen::Output => match key.code {
            Enter | Esc | Backspace | Char('q') | Char(' ') => app.close_output(),
            _ => {}
        },
    }
    Action::None
}
