//! Identifier scheme shared by every collection.
//!
//! Ids are a one-letter prefix followed by a sequence number zero-padded to
//! [`ID_WIDTH`] digits, starting at 1: `U0000000001`, `R0000000042`.

/// Digits in the numeric part of an id.
pub const ID_WIDTH: usize = 10;

/// Collection prefix of an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdPrefix {
    User,
    Resto,
    Dish,
    Image,
    Swipe,
    Location,
}

impl IdPrefix {
    pub fn as_char(&self) -> char {
        match self {
            IdPrefix::User => 'U',
            IdPrefix::Resto => 'R',
            IdPrefix::Dish => 'D',
            IdPrefix::Image => 'I',
            IdPrefix::Swipe => 'S',
            IdPrefix::Location => 'L',
        }
    }

    /// Format the 1-based sequence number `number` as an id.
    pub fn format(&self, number: u64) -> String {
        format!("{}{:0width$}", self.as_char(), number, width = ID_WIDTH)
    }

    /// Id for the 0-based position `index` in a collection.
    pub fn nth(&self, index: usize) -> String {
        self.format(index as u64 + 1)
    }

    /// Parse an id of this prefix back into its sequence number.
    #[cfg(test)]
    pub fn parse(&self, id: &str) -> Option<u64> {
        let digits = id.strip_prefix(self.as_char())?;
        if digits.len() < ID_WIDTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

/// Sequence number of dish `dish_index` at restaurant `resto_index` (both 0-based).
///
/// Unique across all restaurants as long as `dish_index < per_resto`.
pub fn dish_number(per_resto: usize, resto_index: usize, dish_index: usize) -> u64 {
    (per_resto * resto_index + dish_index) as u64 + 1
}
