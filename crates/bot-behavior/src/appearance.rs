//! Face/body/billboard selection from a random "bot number".
//!
//! | bot number | face model   | skeleton model       |
//! |------------|--------------|----------------------|
//! | 1–20       | `bot{n}`     | `defaultAvatar_body` |
//! | 21–40      | `superhero`  | `bot{n}`             |
//! | 41–60      | `amber`      | `bot{n}`             |
//! | 61–80      | `ron`        | `bot{n}`             |
//! | 81–100     | `angie`      | `bot{n}`             |
//!
//! The billboard is always `billboards/bot{n}.png`.

use bot_core::BotRng;
use bot_host::Embodiment;

use crate::{BehaviorError, BehaviorResult};

pub const MESHES_BASE_URL: &str = "https://s3-us-west-1.amazonaws.com/highfidelity-public/meshes";

/// Visual asset references for one bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    pub bot_number:         u32,
    pub face_model_url:     String,
    pub skeleton_model_url: String,
    pub billboard_url:      String,
}

impl Appearance {
    pub const MIN_BOT_NUMBER: u32 = 1;
    pub const MAX_BOT_NUMBER: u32 = 100;

    /// Look up the catalog entry for `bot_number`.
    pub fn for_bot_number(bot_number: u32) -> BehaviorResult<Self> {
        if !(Self::MIN_BOT_NUMBER..=Self::MAX_BOT_NUMBER).contains(&bot_number) {
            return Err(BehaviorError::InvalidBotNumber(bot_number));
        }
        Ok(Self::catalog_entry(bot_number))
    }

    /// Draw a bot number uniformly from the catalog.
    pub fn random(rng: &mut BotRng) -> Self {
        Self::catalog_entry(rng.int_inclusive(Self::MIN_BOT_NUMBER, Self::MAX_BOT_NUMBER))
    }

    /// Point `host`'s face, skeleton, and billboard at these assets.
    pub fn apply<E: Embodiment + ?Sized>(&self, host: &mut E) {
        host.set_face_model_url(&self.face_model_url);
        host.set_skeleton_model_url(&self.skeleton_model_url);
        host.set_billboard_url(&self.billboard_url);
    }

    fn catalog_entry(n: u32) -> Self {
        let numbered = format!("bot{n}");
        let (face, body) = match n {
            1..=20 => (numbered.clone(), "defaultAvatar_body".to_owned()),
            21..=40 => ("superhero".to_owned(), numbered.clone()),
            41..=60 => ("amber".to_owned(), numbered.clone()),
            61..=80 => ("ron".to_owned(), numbered.clone()),
            _ => ("angie".to_owned(), numbered.clone()),
        };

        Self {
            bot_number:         n,
            face_model_url:     format!("{MESHES_BASE_URL}/{face}.fst"),
            skeleton_model_url: format!("{MESHES_BASE_URL}/{body}.fst"),
            billboard_url:      format!("{MESHES_BASE_URL}/billboards/{numbered}.png"),
        }
    }
}
