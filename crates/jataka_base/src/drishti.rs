//! Graha drishti (planetary aspect) on whole signs.
//!
//! Every graha fully aspects the 7th house from itself. Mars additionally
//! aspects the 4th and 8th, Jupiter the 5th and 9th, Saturn the 3rd and 10th.
//! Rahu and Ketu are given Jupiter's 5th/9th aspects in addition to the 7th.

use crate::graha::Graha;
use crate::util::house_from;

/// Houses (counted from the graha, 1 = its own sign) that a graha aspects.
pub fn aspect_offsets(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Mangal => &[4, 7, 8],
        Graha::Guru => &[5, 7, 9],
        Graha::Shani => &[3, 7, 10],
        Graha::Rahu | Graha::Ketu => &[5, 7, 9],
        Graha::Surya | Graha::Chandra | Graha::Buddh | Graha::Shukra => &[7],
    }
}

/// Whether a graha in house `from_house` aspects house `target_house`
/// (both 1-12, counted from the same reference).
pub fn aspects_house(graha: Graha, from_house: u8, target_house: u8) -> bool {
    aspect_offsets(graha).contains(&house_from(from_house, target_house))
}
