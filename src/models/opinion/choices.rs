/// One option of an enumerated field: the stored value and the label shown in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

pub const BUILDINGS: &[Choice] = &[
    Choice { value: "entry-a", label: "Entrée A" },
    Choice { value: "entry-b", label: "Entrée B" },
    Choice { value: "entry-c", label: "Entrée C" },
    Choice { value: "villas", label: "Villas" },
];

pub const STATUSES: &[Choice] = &[
    Choice { value: "owner", label: "Propriétaire" },
    Choice { value: "tenant", label: "Locataire" },
];

pub const WILLING_TO_CHANGE: &[Choice] = &[
    Choice { value: "yes", label: "Oui" },
    Choice { value: "no", label: "Non" },
    Choice { value: "undecided", label: "Indécis" },
];

pub fn is_allowed(choices: &[Choice], value: &str) -> bool {
    choices.iter().any(|c| c.value == value)
}

/// Display label for a stored value, if the value belongs to the table.
pub fn label_for(choices: &[Choice], value: &str) -> Option<&'static str> {
    choices.iter().find(|c| c.value == value).map(|c| c.label)
}
