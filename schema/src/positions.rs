use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Positions a player can occupy once a game is underway.
///
/// Starting and relief pitchers are distinguished in the depth chart, not here:
/// in a game there is only ever one `Pitcher`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum Position {
    #[strum(serialize = "P")]
    Pitcher,
    #[strum(serialize = "C")]
    Catcher,
    #[strum(serialize = "1B")]
    FirstBase,
    #[strum(serialize = "2B")]
    SecondBase,
    #[strum(serialize = "3B")]
    ThirdBase,
    #[strum(serialize = "SS")]
    Shortstop,
    #[strum(serialize = "LF")]
    LeftField,
    #[strum(serialize = "CF")]
    CenterField,
    #[strum(serialize = "RF")]
    RightField,
    #[strum(serialize = "DH")]
    DesignatedHitter,
}

impl Position {
    /// The eight positions filled by position players in the field.
    pub fn fielders() -> impl Iterator<Item = Position> {
        Position::iter().filter(|pos| pos.is_fielder())
    }

    /// True for every defensive position other than the pitcher.
    pub fn is_fielder(self) -> bool {
        !matches!(self, Position::Pitcher | Position::DesignatedHitter)
    }
}
