//! Contact form state with a simulated, always-successful submission.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormField {
    Name,
    Email,
    ProjectType,
    Message,
}

/// Options of the project type select.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ProjectType {
    Landing,
    Ecommerce,
    Business,
    Portfolio,
    Restaurant,
    #[default]
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 6] = [
        Self::Landing,
        Self::Ecommerce,
        Self::Business,
        Self::Portfolio,
        Self::Restaurant,
        Self::Other,
    ];

    /// `value` attribute of the select option.
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Ecommerce => "ecommerce",
            Self::Business => "business",
            Self::Portfolio => "portfolio",
            Self::Restaurant => "restaurant",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Landing => "صفحة هبوط",
            Self::Ecommerce => "متجر إلكتروني",
            Self::Business => "موقع أعمال",
            Self::Portfolio => "موقع شخصي",
            Self::Restaurant => "موقع مطعم",
            Self::Other => "أخرى",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_value() == value)
    }
}

/// Snapshot of the fields taken when the user submits.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum SubmitPhase {
    #[default]
    Idle,
    Sending {
        complete_at_ms: u64,
    },
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    /// Select value; empty until the user picks an option.
    project_type: String,
    message: String,
    phase: SubmitPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::ProjectType => &self.project_type,
            FormField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::ProjectType => &mut self.project_type,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Fills the fields a "request similar site" action knows about.
    pub fn prefill(&mut self, project_type: ProjectType, message: impl Into<String>) {
        self.project_type = project_type.as_value().to_owned();
        self.message = message.into();
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Sending { .. })
    }

    /// Starts the simulated send. Returns `None` while a send is in flight.
    pub fn begin_submit(&mut self, now_ms: u64, delay_ms: u64) -> Option<Submission> {
        if self.is_submitting() {
            return None;
        }

        self.phase = SubmitPhase::Sending {
            complete_at_ms: now_ms.saturating_add(delay_ms),
        };
        Some(Submission {
            name: self.name.clone(),
            email: self.email.clone(),
            project_type: self.project_type.clone(),
            message: self.message.clone(),
        })
    }

    /// Finishes a due send and clears the fields. Returns `true` when that
    /// happened on this call.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.phase {
            SubmitPhase::Sending { complete_at_ms } if now_ms >= complete_at_ms => {
                *self = Self::default();
                true
            }
            _ => false,
        }
    }
}
