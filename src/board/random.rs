//! Random source for element creation.

use crate::constants::ELEMENT_ID_LEN;
use rand::Rng;

/// Supplies element ids and spawn coordinates.
///
/// Ids only need to be unlikely to collide; nothing here is security
/// sensitive. Every `rand::Rng` is a `RandomSource`.
pub trait RandomSource {
    /// A fresh lowercase hex id of `ELEMENT_ID_LEN` characters
    fn element_id(&mut self) -> String;

    /// A uniform integer in the closed range `[low, high]`
    fn int_between(&mut self, low: i32, high: i32) -> i32;
}

impl<R: Rng> RandomSource for R {
    fn element_id(&mut self) -> String {
        (0..ELEMENT_ID_LEN)
            .map(|_| {
                let digit = self.gen_range(0..16u32);
                char::from_digit(digit, 16).unwrap_or('0')
            })
            .collect()
    }

    fn int_between(&mut self, low: i32, high: i32) -> i32 {
        if low >= high {
            return low;
        }
        self.gen_range(low..=high)
    }
}
