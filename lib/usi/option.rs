use std::fmt::{self, Display, Formatter};

/// An option advertised to the GUI.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum UsiOption {
    Check {
        #[cfg_attr(test, strategy("[A-Za-z_]{1,16}"))]
        name: String,
        default: bool,
    },
    Spin {
        #[cfg_attr(test, strategy("[A-Za-z_]{1,16}"))]
        name: String,
        default: i64,
        min: i64,
        max: i64,
    },
}

impl UsiOption {
    pub fn check(name: impl Into<String>, default: bool) -> Self {
        UsiOption::Check {
            name: name.into(),
            default,
        }
    }

    pub fn spin(name: impl Into<String>, default: i64, min: i64, max: i64) -> Self {
        UsiOption::Spin {
            name: name.into(),
            default,
            min,
            max,
        }
    }

    /// The option's name.
    #[inline(always)]
    pub fn name(&self) -> &str {
        match self {
            UsiOption::Check { name, .. } | UsiOption::Spin { name, .. } => name,
        }
    }
}

impl Display for UsiOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "option name {} type ", self.name())?;

        match self {
            UsiOption::Check { default, .. } => write!(f, "check default {default}"),
            UsiOption::Spin {
                default, min, max, ..
            } => write!(f, "spin default {default} min {min} max {max}"),
        }
    }
}
