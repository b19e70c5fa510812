//! Pseudo-states and the selector groups they compile to.

use serde::Deserialize;

/// Selector group for text selection colours.
pub const SELECTION_SELECTOR: &str = "::selection";

/// An interaction or accessibility state a set or box can style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoState {
    Hover,
    Active,
    Focus,
    FocusVisible,
    Disabled,
    Checked,
    Current,
    Invalid,
    Pressed,
}

impl PseudoState {
    pub const ALL: [PseudoState; 9] = [
        PseudoState::Hover,
        PseudoState::Active,
        PseudoState::Focus,
        PseudoState::FocusVisible,
        PseudoState::Disabled,
        PseudoState::Checked,
        PseudoState::Current,
        PseudoState::Invalid,
        PseudoState::Pressed,
    ];

    /// The document key the state is declared under.
    pub fn key(self) -> &'static str {
        match self {
            PseudoState::Hover => "__hover",
            PseudoState::Active => "__active",
            PseudoState::Focus => "__focus",
            PseudoState::FocusVisible => "__focusVisible",
            PseudoState::Disabled => "__disabled",
            PseudoState::Checked => "__checked",
            PseudoState::Current => "__current",
            PseudoState::Invalid => "__invalid",
            PseudoState::Pressed => "__pressed",
        }
    }

    /// The selector group the state's styles are nested under.
    pub fn selector(self) -> &'static str {
        match self {
            PseudoState::Hover => "&:hover",
            PseudoState::Active => "&:active",
            PseudoState::Focus => "&:focus,&:focus-within",
            PseudoState::FocusVisible => "&:focus-visible",
            PseudoState::Disabled => "&:disabled,&[aria-disabled=true]",
            PseudoState::Checked => "&:checked,&[aria-checked=true],&[aria-checked=mixed]",
            PseudoState::Current => {
                "&[aria-current=true],&[aria-current=page],&[aria-current=step],\
                 &[aria-current=location],&[aria-current=date],&[aria-current=time]"
            }
            PseudoState::Invalid => {
                "&:invalid,&[aria-invalid=true],&[aria-invalid=grammar],&[aria-invalid=spelling]"
            }
            PseudoState::Pressed => "&[aria-pressed=true],&[aria-pressed=mixed]",
        }
    }
}

/// Per-state overrides of a map, as declared with `__hover`, `__active`, ...
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PseudoStates<T> {
    #[serde(rename = "__hover")]
    pub hover: Option<T>,
    #[serde(rename = "__active")]
    pub active: Option<T>,
    #[serde(rename = "__focus")]
    pub focus: Option<T>,
    #[serde(rename = "__focusVisible")]
    pub focus_visible: Option<T>,
    #[serde(rename = "__disabled")]
    pub disabled: Option<T>,
    #[serde(rename = "__checked")]
    pub checked: Option<T>,
    #[serde(rename = "__current")]
    pub current: Option<T>,
    #[serde(rename = "__invalid")]
    pub invalid: Option<T>,
    #[serde(rename = "__pressed")]
    pub pressed: Option<T>,
}

impl<T> PseudoStates<T> {
    pub fn get(&self, state: PseudoState) -> Option<&T> {
        match state {
            PseudoState::Hover => self.hover.as_ref(),
            PseudoState::Active => self.active.as_ref(),
            PseudoState::Focus => self.focus.as_ref(),
            PseudoState::FocusVisible => self.focus_visible.as_ref(),
            PseudoState::Disabled => self.disabled.as_ref(),
            PseudoState::Checked => self.checked.as_ref(),
            PseudoState::Current => self.current.as_ref(),
            PseudoState::Invalid => self.invalid.as_ref(),
            PseudoState::Pressed => self.pressed.as_ref(),
        }
    }

    /// Declared states, in [`PseudoState::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (PseudoState, &T)> + '_ {
        PseudoState::ALL
            .into_iter()
            .filter_map(move |state| self.get(state).map(|value| (state, value)))
    }
}
