//! The three schedule sections and their fixed identifiers.

/// Source of a schedule section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Institution-specific schedules
    Institution,
    /// Statewide general schedules
    Statewide,
    /// Governing-board schedules
    Board,
}

impl SectionKind {
    /// All sections, in page order.
    pub const ALL: [SectionKind; 3] = [Self::Institution, Self::Statewide, Self::Board];

    /// Element id of the section wrapper.
    pub fn id(self) -> &'static str {
        match self {
            Self::Institution => "kstate",
            Self::Statewide => "state",
            Self::Board => "regents",
        }
    }

    /// Section heading text.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Institution => "K-State Schedules",
            Self::Statewide => "State Schedules",
            Self::Board => "Regents Schedules",
        }
    }

    /// Element id of the toolbar control that toggles this section.
    pub fn button_id(self) -> &'static str {
        match self {
            Self::Institution => "kstatebutton",
            Self::Statewide => "statebutton",
            Self::Board => "regentbutton",
        }
    }

    /// Toolbar control label.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Institution => "K-State Schedules",
            Self::Statewide => "State General Schedules",
            Self::Board => "Regent Schedules",
        }
    }

    /// Toolbar control tooltip.
    pub fn button_title(self) -> &'static str {
        match self {
            Self::Institution => "Hide or show the K-State schedules",
            Self::Statewide => "Hide or show the Kansas state schedules",
            Self::Board => "Hide or show the Regents schedules",
        }
    }
}
