use crate::Point;

/// Options for configuring a [`PathSearch`](crate::PathSearch)
///
/// Default options:
/// ```
/// # use stepwise_pathfinding::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         start: None,
///         goal: None,
///         size_hint: None,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SearchConfig {
    /// Where the search starts (defaults to the top-left corner of the Grid).
    ///
    /// The start is free to occupy: its own cost is never added to a Path.
    pub start: Option<Point>,
    /// Where the search ends (defaults to the bottom-right corner of the Grid).
    pub goal: Option<Point>,
    /// The number of Points the search is expected to visit (defaults to the size of the Grid).
    ///
    /// Only used to preallocate the open and closed sets.
    pub size_hint: Option<usize>,
}

impl SearchConfig {
    /// a Config that searches from `start` instead of the top-left corner
    ///
    /// ## Examples
    /// ```
    /// # use stepwise_pathfinding::SearchConfig;
    /// let config = SearchConfig::default().with_start((2, 3));
    /// assert_eq!(config.start, Some((2, 3)));
    /// assert_eq!(config.goal, None);
    /// ```
    pub fn with_start(self, start: Point) -> SearchConfig {
        SearchConfig {
            start: Some(start),
            ..self
        }
    }

    /// a Config that searches for `goal` instead of the bottom-right corner
    pub fn with_goal(self, goal: Point) -> SearchConfig {
        SearchConfig {
            goal: Some(goal),
            ..self
        }
    }

    /// a Config that preallocates room for `size_hint` Points
    pub fn with_size_hint(self, size_hint: usize) -> SearchConfig {
        SearchConfig {
            size_hint: Some(size_hint),
            ..self
        }
    }
}
