//! The clip library bots pick chatter from.

use bot_host::SoundClip;

pub const COCKTAIL_PARTY_BASE_URL: &str =
    "https://s3-us-west-1.amazonaws.com/highfidelity-public/sounds/Cocktail+Party+Snippets/Raws/";

/// Stock clip names.  `B1.raw` appears twice in the stock list and is kept
/// that way so draws are weighted the same.
const COCKTAIL_PARTY_CLIPS: [&str; 48] = [
    "AB1.raw", "Anchorman2.raw", "B1.raw", "B1.raw", "Bale1.raw", "Bandcamp.raw",
    "Big1.raw", "Big2.raw", "Brian1.raw", "Buster1.raw", "CES1.raw", "CES2.raw",
    "CES3.raw", "CES4.raw", "Carrie1.raw", "Carrie3.raw", "Charlotte1.raw", "EN1.raw",
    "EN2.raw", "EN3.raw", "Eugene1.raw", "Francesco1.raw", "Italian1.raw", "Japanese1.raw",
    "Leigh1.raw", "Lucille1.raw", "Lucille2.raw", "MeanGirls.raw", "Murray2.raw", "Nigel1.raw",
    "PennyLane.raw", "Pitt1.raw", "Ricardo.raw", "SN.raw", "Sake1.raw", "Samantha1.raw",
    "Samantha2.raw", "Spicoli1.raw", "Supernatural.raw", "Swearengen1.raw", "TheDude.raw", "Tony.raw",
    "Triumph1.raw", "Uma1.raw", "Walken1.raw", "Walken2.raw", "Z1.raw", "Z2.raw",
];

/// An ordered, immutable list of clips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundLibrary {
    clips: Vec<SoundClip>,
}

impl SoundLibrary {
    pub fn new(clips: Vec<SoundClip>) -> Self {
        Self { clips }
    }

    pub fn empty() -> Self {
        Self { clips: Vec::new() }
    }

    /// The stock cocktail-party snippets.
    pub fn cocktail_party() -> Self {
        COCKTAIL_PARTY_CLIPS
            .iter()
            .map(|name| SoundClip::new(format!("{COCKTAIL_PARTY_BASE_URL}{name}")))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SoundClip> {
        self.clips.get(index)
    }

    pub fn clips(&self) -> &[SoundClip] {
        &self.clips
    }
}

impl Default for SoundLibrary {
    fn default() -> Self {
        Self::cocktail_party()
    }
}

impl FromIterator<SoundClip> for SoundLibrary {
    fn from_iter<I: IntoIterator<Item = SoundClip>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
