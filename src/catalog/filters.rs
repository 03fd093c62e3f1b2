//! The four filter predicates and the snapshot of user criteria they run
//! against.
//!
//! Each predicate is pure and independent of the others; the catalog applies
//! them as a conjunction, so their order never changes the result.

use crate::types::Program;

use super::normalize::normalize;

/// Week thresholds for the duration bands.
const SHORT_MAX_WEEKS: u32 = 16;
const MID_MAX_WEEKS: u32 = 26;

/// Duration band selected by the user. `Any` disables the duration filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DurationBand {
    #[default]
    Any,
    /// At most 16 weeks.
    Short,
    /// 17 to 26 weeks inclusive.
    Mid,
    /// 27 weeks or more.
    Long,
}

impl DurationBand {
    /// Whether a programme of `weeks` weeks falls inside this band.
    #[must_use]
    pub fn contains(self, weeks: u32) -> bool {
        match self {
            DurationBand::Any => true,
            DurationBand::Short => weeks <= SHORT_MAX_WEEKS,
            DurationBand::Mid => weeks > SHORT_MAX_WEEKS && weeks <= MID_MAX_WEEKS,
            DurationBand::Long => weeks > MID_MAX_WEEKS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DurationBand::Any => "any",
            DurationBand::Short => "short",
            DurationBand::Mid => "mid",
            DurationBand::Long => "long",
        }
    }

    /// The next band in cycling order, used by the interactive filter toggle.
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            DurationBand::Any => DurationBand::Short,
            DurationBand::Short => DurationBand::Mid,
            DurationBand::Mid => DurationBand::Long,
            DurationBand::Long => DurationBand::Any,
        }
    }
}

/// A snapshot of the four filter criteria. Rebuilt from the input surface on
/// every change; the catalog never retains references into it.
#[derive(Debug, Clone, Default)]
pub struct FilterInput {
    pub query: String,
    pub paid_only: bool,
    /// Empty means "all regions".
    pub region: String,
    pub duration: DurationBand,
}

impl FilterInput {
    /// True iff the programme passes all four predicates.
    #[must_use]
    pub fn matches(&self, program: &Program) -> bool {
        matches_query(program, &self.query)
            && matches_paid(program, self.paid_only)
            && matches_region(program, &self.region)
            && matches_duration(program, self.duration)
    }
}

/// Substring match over the lower-cased `title company description`
/// haystack. Absent fields contribute empty text but the single-space
/// joins stay, mirroring the published dataset's search behaviour.
#[must_use]
pub fn matches_query(program: &Program, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {} {}",
        program.title_text(),
        program.company_text(),
        program.description_text()
    )
    .to_lowercase();
    haystack.contains(&query.to_lowercase())
}

#[must_use]
pub fn matches_paid(program: &Program, paid_only: bool) -> bool {
    !paid_only || program.paid
}

/// Case-insensitive exact match against any of the programme's regions.
#[must_use]
pub fn matches_region(program: &Program, selected: &str) -> bool {
    if selected.is_empty() {
        return true;
    }
    let wanted = normalize(selected);
    program
        .region
        .iter()
        .any(|region| normalize(region) == wanted)
}

#[must_use]
pub fn matches_duration(program: &Program, band: DurationBand) -> bool {
    band.contains(program.duration_weeks)
}
