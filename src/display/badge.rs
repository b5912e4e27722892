use html_escape::encode_text;

// `concat!` only takes literals, so the shared class lists are macros
macro_rules! layout_classes { () => { "flex items-center gap-1" } }
macro_rules! verified_classes { () => { "bg-primary text-white" } }
macro_rules! unverified_classes { () => { "bg-neutral-800 text-white border border-warning" } }
macro_rules! shape_classes { () => { "px-2 py-1 rounded-full" } }

pub const LAYOUT_CLASSES: &str = layout_classes!();
pub const SHAPE_CLASSES: &str = shape_classes!();

const VERIFIED_BADGE: &str = concat!(layout_classes!(), " ", verified_classes!(), " ", shape_classes!());
const UNVERIFIED_BADGE: &str = concat!(layout_classes!(), " ", unverified_classes!(), " ", shape_classes!());

/// Whether a user or project has passed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationState {
    Verified,
    Unverified,
}

impl From<bool> for VerificationState {
    fn from(is_verified: bool) -> Self {
        if is_verified {
            Self::Verified
        } else {
            Self::Unverified
        }
    }
}

impl VerificationState {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Verified => VERIFIED_BADGE,
            Self::Unverified => UNVERIFIED_BADGE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::Unverified => "Unverified",
        }
    }
}

pub fn badge_class(is_verified: bool) -> String {
    VerificationState::from(is_verified).class_name().to_string()
}

/// Renders a badge `<span>` with an escaped label, or the state's default label.
pub fn badge_html(state: VerificationState, label: Option<&str>) -> String {
    format!(
        r#"<span class="{}">{}</span>"#,
        state.class_name(),
        encode_text(label.unwrap_or(state.label()))
    )
}
