use devday_terminal::Interpreter;
use devday_types::backend::TerminalSink;
use devday_types::input::InputEvent;

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Route one backend event to the interpreter.
pub fn handle_event(
    event: InputEvent,
    interp: &mut Interpreter,
    sink: &mut dyn TerminalSink,
) -> InputResult {
    match event {
        InputEvent::Quit => return InputResult::Quit,
        InputEvent::Data(unit) => {
            if let Err(e) = interp.handle_input(&unit, sink) {
                log::warn!("Dropped input {unit:?}: {e}");
            }
        },
        InputEvent::FocusGained => log::debug!("Focus gained"),
        InputEvent::FocusLost => log::debug!("Focus lost"),
        InputEvent::Resize { cols, rows } => log::debug!("Resized to {cols}x{rows}"),
    }
    InputResult::Continue
}
