//! Integer-coded categorical fields.
//!
//! The backend sends every categorical field as a small integer. Each one is a
//! Rust enum here; an unknown code fails deserialization instead of leaking a
//! raw number into the table.

/// A categorical code the client does not know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} code: {code}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: u8,
}

/// Text that names no variant, by code or by label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCodeError {
    #[error(transparent)]
    Code(#[from] UnknownCode),

    #[error("unknown {kind} label: {label:?}")]
    Label { kind: &'static str, label: String },
}

macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(try_from = "u8", into = "u8")]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code ),+
        }

        impl $name {
            /// Every variant in code order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn code(self) -> u8 {
                self as u8
            }

            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.code()
            }
        }

        impl TryFrom<u8> for $name {
            type Error = UnknownCode;

            fn try_from(code: u8) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok(Self::$variant),)+
                    other => Err(UnknownCode {
                        kind: stringify!($name),
                        code: other,
                    }),
                }
            }
        }

        /// Accepts the numeric code or the label, case-insensitively.
        impl std::str::FromStr for $name {
            type Err = ParseCodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                if let Ok(code) = s.parse::<u8>() {
                    return Ok(Self::try_from(code)?);
                }
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ParseCodeError::Label {
                        kind: stringify!($name),
                        label: s.to_owned(),
                    })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

coded_enum! {
    pub enum Gender {
        Unset = 0 => "Unset",
        Male = 1 => "Male",
        Female = 2 => "Female",
    }
}

coded_enum! {
    pub enum UserType {
        Student = 1 => "Student",
        Alumni = 2 => "Alumni",
    }
}

coded_enum! {
    /// Registration review lifecycle: unverified → pending → rejected/approved.
    pub enum ReviewStatus {
        Unverified = 0 => "Unverified",
        Pending = 1 => "Pending",
        Rejected = 2 => "Rejected",
        Approved = 3 => "Approved",
    }
}

coded_enum! {
    /// Whether the user has filled in their personal profile.
    pub enum Completion {
        Incomplete = 0 => "Incomplete",
        Complete = 1 => "Complete",
    }
}

coded_enum! {
    pub enum BlacklistFlag {
        Clear = 0 => "No",
        Listed = 1 => "Yes",
    }
}

impl BlacklistFlag {
    pub fn is_listed(self) -> bool {
        matches!(self, Self::Listed)
    }

    /// The flag a toggle should request.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Clear => Self::Listed,
            Self::Listed => Self::Clear,
        }
    }
}
