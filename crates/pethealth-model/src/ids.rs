use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PetId(i64);

impl PetId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(i64);

impl RecordId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FoodId(i64);

impl FoodId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues entity identifiers derived from the wall clock.
///
/// An id is the current unix-epoch millisecond count, bumped past the last
/// issued value so repeated calls within the same millisecond still produce
/// distinct, strictly increasing ids. `observe` raises the floor, letting
/// fixtures use small hand-picked ids without risking a later collision.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure future ids are strictly greater than `raw`.
    pub fn observe(&mut self, raw: i64) {
        self.last = self.last.max(raw);
    }

    pub fn next_pet_id(&mut self) -> PetId {
        PetId(self.next_raw())
    }

    pub fn next_record_id(&mut self) -> RecordId {
        RecordId(self.next_raw())
    }

    pub fn next_food_id(&mut self) -> FoodId {
        FoodId(self.next_raw())
    }

    fn next_raw(&mut self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_strictly_increase() {
        let mut ids = IdGenerator::new();
        let a = ids.next_pet_id().raw();
        let b = ids.next_record_id().raw();
        let c = ids.next_food_id().raw();
        assert!(a < b, "expected {} < {}", a, b);
        assert!(b < c, "expected {} < {}", b, c);
    }

    #[test]
    fn ids_are_timestamp_sized() {
        let mut ids = IdGenerator::new();
        // Anything issued after 2024 is comfortably above this.
        assert!(ids.next_pet_id().raw() > 1_700_000_000_000);
    }

    #[test]
    fn observe_raises_the_floor() {
        let mut ids = IdGenerator::new();
        let far_future = 4_102_444_800_000; // 2100-01-01
        ids.observe(far_future);
        assert!(ids.next_record_id().raw() > far_future);
    }

    #[test]
    fn observe_never_lowers_the_floor() {
        let mut ids = IdGenerator::new();
        let first = ids.next_pet_id().raw();
        ids.observe(1);
        assert!(ids.next_pet_id().raw() > first);
    }
}
