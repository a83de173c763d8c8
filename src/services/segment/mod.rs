//! Per-day rendering decisions for occurrences.
//!
//! A multi-day occurrence is drawn as one segment per day cell. Segments
//! only round the edges where the occurrence really starts or ends, so
//! adjacent cells read as one continuous bar.

use chrono::NaiveDate;

use crate::models::occurrence::Occurrence;

/// Where `day` sits within an occurrence's span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    pub is_first_day: bool,
    pub is_last_day: bool,
    pub is_multi_day: bool,
}

impl Segment {
    /// The bar runs on from the previous day cell.
    pub fn continues_before(&self) -> bool {
        self.is_multi_day && !self.is_first_day
    }

    /// The bar runs on into the next day cell.
    pub fn continues_after(&self) -> bool {
        self.is_multi_day && !self.is_last_day
    }
}

/// Date-only comparison of `day` against the occurrence bounds.
pub fn resolve_segment(occurrence: &Occurrence<'_>, day: NaiveDate) -> Segment {
    let first = occurrence.start_day();
    let last = occurrence.end_day();

    Segment {
        is_first_day: day == first,
        is_last_day: day == last,
        is_multi_day: first != last,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentFill {
    /// All-day events: solid bar.
    SolidBar,
    /// Timed events: bordered chip.
    BorderedChip,
}

/// Which horizontal edges get rounded corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corners {
    pub round_start: bool,
    pub round_end: bool,
}

impl Corners {
    pub const FULL: Corners = Corners {
        round_start: true,
        round_end: true,
    };

    pub const SQUARE: Corners = Corners {
        round_start: false,
        round_end: false,
    };

    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentStyle {
    pub fill: SegmentFill,
    pub corners: Corners,
}

/// Visual treatment for the part of `occurrence` drawn on `day`.
///
/// Returns `None` when `day` is outside the occurrence.
pub fn segment_style(occurrence: &Occurrence<'_>, day: NaiveDate) -> Option<SegmentStyle> {
    if !occurrence.covers(day) {
        return None;
    }

    let segment = resolve_segment(occurrence, day);
    let fill = if occurrence.is_all_day() {
        SegmentFill::SolidBar
    } else {
        SegmentFill::BorderedChip
    };
    let corners = if segment.is_multi_day {
        Corners {
            round_start: segment.is_first_day,
            round_end: segment.is_last_day,
        }
    } else {
        Corners::FULL
    };

    Some(SegmentStyle { fill, corners })
}

/// A month cell's occurrences after the inline limit is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub inline: Vec<Occurrence<'a>>,
    pub overflow: usize,
}

impl<'a> DayCell<'a> {
    /// Keep the first `max_inline` occurrences; count the rest.
    pub fn layout(occurrences: &[Occurrence<'a>], max_inline: usize) -> Self {
        let shown = occurrences.len().min(max_inline);
        Self {
            inline: occurrences[..shown].to_vec(),
            overflow: occurrences.len() - shown,
        }
    }

    /// "+N more", or `None` when everything fits.
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{} more", self.overflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::Event;
    use crate::services::event::recurrence::expand;
    use crate::utils::date::DateWindow;
    use chrono::Duration;
    use test_case::test_case;

    fn day(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    fn offsite() -> Event {
        Event::builder()
            .title("Offsite")
            .all_day_span(day(8, 30), day(9, 2))
            .build()
            .unwrap()
    }

    fn timed_overnight() -> Event {
        let start = day(8, 14).and_hms_opt(22, 0, 0).unwrap();
        Event::new("Release night", start, start + Duration::hours(28)).unwrap()
    }

    fn occurrence(event: &Event) -> Occurrence<'_> {
        Occurrence {
            event,
            start: event.start_date,
            end: event.end_date,
            sequence_index: 0,
        }
    }

    #[test_case(day(8, 30), true, false; "first day")]
    #[test_case(day(8, 31), false, false; "middle day")]
    #[test_case(day(9, 1), false, false; "middle day next month")]
    #[test_case(day(9, 2), false, true; "last day")]
    fn test_resolve_segment_across_month_boundary(date: NaiveDate, first: bool, last: bool) {
        let event = offsite();
        let segment = resolve_segment(&occurrence(&event), date);

        assert_eq!(segment.is_first_day, first);
        assert_eq!(segment.is_last_day, last);
        assert!(segment.is_multi_day);
    }

    #[test]
    fn test_single_day_segment() {
        let start = day(8, 15).and_hms_opt(10, 0, 0).unwrap();
        let event = Event::new("Review", start, start + Duration::minutes(90)).unwrap();
        let segment = resolve_segment(&occurrence(&event), day(8, 15));

        assert!(segment.is_first_day && segment.is_last_day);
        assert!(!segment.is_multi_day);
        assert!(!segment.continues_before());
        assert!(!segment.continues_after());
    }

    #[test]
    fn test_all_day_bar_squares_inner_edges() {
        let event = offsite();
        let occurrence = occurrence(&event);

        let first = segment_style(&occurrence, day(8, 30)).unwrap();
        let middle = segment_style(&occurrence, day(8, 31)).unwrap();
        let last = segment_style(&occurrence, day(9, 2)).unwrap();

        assert_eq!(first.fill, SegmentFill::SolidBar);
        assert_eq!(first.corners, Corners { round_start: true, round_end: false });
        assert_eq!(middle.corners, Corners::SQUARE);
        assert_eq!(last.corners, Corners { round_start: false, round_end: true });
    }

    #[test]
    fn test_timed_chip_rounding() {
        let event = timed_overnight();
        let occurrence = occurrence(&event);

        let first = segment_style(&occurrence, day(8, 14)).unwrap();
        let last = segment_style(&occurrence, day(8, 16)).unwrap();

        assert_eq!(first.fill, SegmentFill::BorderedChip);
        assert!(first.corners.round_start && !first.corners.round_end);
        assert!(!last.corners.round_start && last.corners.round_end);
    }

    #[test]
    fn test_single_day_timed_chip_fully_rounded() {
        let start = day(8, 15).and_hms_opt(10, 0, 0).unwrap();
        let event = Event::new("Review", start, start).unwrap();
        let style = segment_style(&occurrence(&event), day(8, 15)).unwrap();

        assert_eq!(style.fill, SegmentFill::BorderedChip);
        assert!(style.corners.is_full());
    }

    #[test]
    fn test_style_outside_span_is_none() {
        let event = offsite();
        assert!(segment_style(&occurrence(&event), day(9, 3)).is_none());
    }

    #[test]
    fn test_segments_follow_expanded_occurrence() {
        let event = offsite();
        let window = DateWindow::new(day(8, 1), day(9, 30));
        let expanded = expand(&event, &window);

        let segment = resolve_segment(&expanded[0], day(8, 30));
        assert!(segment.continues_after());
    }

    #[test]
    fn test_day_cell_layout_overflow() {
        let start = day(8, 15).and_hms_opt(9, 0, 0).unwrap();
        let events: Vec<Event> = (0..5)
            .map(|i| Event::new(format!("Event {}", i), start, start).unwrap())
            .collect();
        let occurrences: Vec<_> = events.iter().map(occurrence).collect();

        let cell = DayCell::layout(&occurrences, 2);
        assert_eq!(cell.inline.len(), 2);
        assert_eq!(cell.overflow, 3);
        assert_eq!(cell.overflow_label().as_deref(), Some("+3 more"));

        let roomy = DayCell::layout(&occurrences, 10);
        assert_eq!(roomy.overflow_label(), None);
    }
}
