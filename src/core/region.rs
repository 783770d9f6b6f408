/// A contiguous interval of trace steps assigned to one story step.
///
/// `length = end - start`; a region produced by [`MappingRegion::intersection`]
/// on disjoint inputs has `end < start` and therefore a negative length, which
/// is how "no overlap" is detected. Regions are plain `Copy` values: the path
/// selector mutates its own copies, never the extraction results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingRegion {
    /// Index of the story step that owns this region.
    pub story_index: usize,
    /// First trace step of the region.
    pub start: usize,
    /// Trace step where the region closes.
    pub end: usize,
}

impl MappingRegion {
    pub fn new(story_index: usize, start: usize, end: usize) -> Self {
        Self {
            story_index,
            start,
            end,
        }
    }

    /// Signed length. Negative only for degenerate intersection results.
    pub fn length(&self) -> i64 {
        self.end as i64 - self.start as i64
    }

    /// Overlap of the two regions: latest start to earliest end.
    ///
    /// Carries the story index of `other`. For disjoint regions the result
    /// has `end < start` (negative length).
    pub fn intersection(&self, other: &MappingRegion) -> MappingRegion {
        MappingRegion {
            story_index: other.story_index,
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        }
    }

    /// Distance between the two region centers (integer midpoints).
    pub fn distance(&self, other: &MappingRegion) -> f64 {
        let self_center = ((self.start + self.end) / 2) as f64;
        let other_center = ((other.start + other.end) / 2) as f64;
        (self_center - other_center).abs()
    }

    /// True if the regions share at least one step.
    pub fn intersects(&self, other: &MappingRegion) -> bool {
        self.intersection(other).length() > 0
    }

    /// True if this region lies entirely within `other`.
    pub fn is_inside(&self, other: &MappingRegion) -> bool {
        self.start >= other.start && self.end <= other.end
    }

    /// True if `other` overlaps this region's left edge without covering it.
    pub fn has_left_intersection(&self, other: &MappingRegion) -> bool {
        other.start < self.start && other.end > self.start && other.end < self.end
    }

    /// True if `other` overlaps this region's right edge without covering it.
    pub fn has_right_intersection(&self, other: &MappingRegion) -> bool {
        other.start < self.end && other.end > self.end && other.start > self.start
    }

    /// True if this region begins strictly after `other` ends.
    pub fn follows(&self, other: &MappingRegion) -> bool {
        self.start > other.end
    }
}
