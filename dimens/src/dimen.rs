use std::ops::RangeInclusive;

/// Unscaled dp values generated for every bucket.
pub const DEFAULT_RANGE: RangeInclusive<u32> = 1..=100;

/// One `<dimen>` resource: `{dp}dp` scaled to the bucket density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimen {
    dp: u32,
    scaled: f32,
}

impl Dimen {
    pub fn new(dp: u32, scale: f32) -> Self {
        Self {
            dp,
            scaled: dp as f32 * scale,
        }
    }

    pub fn dp(&self) -> u32 {
        self.dp
    }

    pub fn scaled(&self) -> f32 {
        self.scaled
    }

    /// Resource name, e.g. `50dp`.
    pub fn name(&self) -> String {
        format!("{}dp", self.dp)
    }

    /// Resource value, e.g. `37.5dp` or `100.0dp`.
    pub fn value(&self) -> String {
        // debug formatting keeps the `.0` on whole numbers
        format!("{:?}dp", self.scaled)
    }
}

/// Dimensions of a single bucket ordered by unscaled dp.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DimenMap {
    dimens: Vec<Dimen>,
}

impl DimenMap {
    pub fn len(&self) -> usize {
        self.dimens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dimen> + '_ {
        self.dimens.iter()
    }

    /// Looks up a dimension by resource name.
    pub fn get(&self, name: &str) -> Option<&Dimen> {
        let dp = name.strip_suffix("dp")?.parse::<u32>().ok()?;
        self.dimens
            .binary_search_by_key(&dp, |dimen| dimen.dp)
            .ok()
            .map(|i| &self.dimens[i])
    }
}

impl<'a> IntoIterator for &'a DimenMap {
    type Item = &'a Dimen;
    type IntoIter = std::slice::Iter<'a, Dimen>;

    fn into_iter(self) -> Self::IntoIter {
        self.dimens.iter()
    }
}

/// Generates `{n}dp -> {n * scale}dp` for every `n` in `start..=end`.
///
/// An empty map is returned when `start > end`.
pub fn generate_dimens(start: u32, end: u32, scale: f32) -> DimenMap {
    DimenMap {
        dimens: (start..=end).map(|dp| Dimen::new(dp, scale)).collect(),
    }
}
