use strum_macros::{Display, EnumIter};

/// How many leading points of a result set the chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Default)]
pub enum TimeWindow {
    #[strum(to_string = "Next 3 hours")]
    Hours3,
    #[strum(to_string = "Next 6 hours")]
    Hours6,
    #[strum(to_string = "Next 12 hours")]
    Hours12,
    #[strum(to_string = "Next 24 hours")]
    #[default]
    Hours24,
}

impl TimeWindow {
    pub const fn points(self) -> usize {
        match self {
            Self::Hours3 => 3,
            Self::Hours6 => 6,
            Self::Hours12 => 12,
            Self::Hours24 => 24,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn default_is_a_full_day() {
        assert_eq!(TimeWindow::default(), TimeWindow::Hours24);
        assert_eq!(TimeWindow::default().points(), 24);
    }

    #[test]
    fn selector_lists_windows_smallest_first() {
        let counts: Vec<usize> = TimeWindow::iter().map(TimeWindow::points).collect();
        assert_eq!(counts, vec![3, 6, 12, 24]);
        assert_eq!(TimeWindow::Hours6.to_string(), "Next 6 hours");
    }
}
