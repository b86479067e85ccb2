use super::state::Mode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    SetMode(Mode),
    ToggleMode,

    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,
    /// Pick the swatch under the cursor
    Activate,
    /// Pick a swatch by its symbol (`b1`..`b7`)
    Pick(&'static str),

    StepBack,
    Reset,
    Copy,

    ToggleHelp,
    Resize,
}
