//! Loading spinner sizing.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinnerSize {
    Sm,
    Md,
    Lg,
}

impl SpinnerSize {
    pub fn css_class(&self) -> &'static str {
        match self {
            SpinnerSize::Sm => "w-4 h-4",
            SpinnerSize::Md => "w-8 h-8",
            SpinnerSize::Lg => "w-12 h-12",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_are_distinct() {
        assert_ne!(SpinnerSize::Sm.css_class(), SpinnerSize::Lg.css_class());
        assert_ne!(SpinnerSize::Sm.css_class(), SpinnerSize::Md.css_class());
    }
}
