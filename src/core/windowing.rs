use crate::core::DataPoint;

/// One point of the visible window together with its index in the source data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleBar<'a> {
    pub original_index: usize,
    pub point: &'a DataPoint,
}

/// Ordered subset of the source data currently on screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisibleSlice<'a> {
    bars: Vec<VisibleBar<'a>>,
}

impl<'a> VisibleSlice<'a> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    #[must_use]
    pub fn bars(&self) -> &[VisibleBar<'a>] {
        &self.bars
    }

    pub fn iter(&self) -> impl Iterator<Item = &VisibleBar<'a>> {
        self.bars.iter()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&VisibleBar<'a>> {
        self.bars.get(position)
    }

    /// Owned copies of the visible points, in display order.
    #[must_use]
    pub fn to_points(&self) -> Vec<DataPoint> {
        self.bars.iter().map(|bar| bar.point.clone()).collect()
    }
}

/// Selects entries with `initial_value <= index < initial_value + number_shown_columns`.
///
/// A negative or out-of-range offset, or a non-positive column count, yields
/// an empty slice rather than an error.
#[must_use]
pub fn select_window(
    data: &[DataPoint],
    initial_value: i64,
    number_shown_columns: i64,
) -> VisibleSlice<'_> {
    if number_shown_columns <= 0 || initial_value < 0 {
        return VisibleSlice::default();
    }
    let Ok(start) = usize::try_from(initial_value) else {
        return VisibleSlice::default();
    };
    if start >= data.len() {
        return VisibleSlice::default();
    }
    let count = usize::try_from(number_shown_columns).unwrap_or(usize::MAX);
    let end = start.saturating_add(count).min(data.len());

    let bars = data[start..end]
        .iter()
        .enumerate()
        .map(|(offset, point)| VisibleBar {
            original_index: start + offset,
            point,
        })
        .collect();
    VisibleSlice { bars }
}
