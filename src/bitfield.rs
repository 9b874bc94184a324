use core::fmt::{self, Binary, Debug, Display, Formatter};
use core::iter::{FusedIterator, Iterator};
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub, SubAssign,
};

/// Number of positions a [`BitField`] can hold.
pub const WIDTH: usize = u64::BITS as usize;

#[inline]
fn assert_in_bounds(n: usize) {
    assert!(n < WIDTH, "Bit index {n} out of bounds");
}

#[inline]
const fn mask(n: usize) -> u64 {
    1 << n
}

/// A set of the integers `0..=63`, one bit of a `u64` per member.
///
/// Bit `n` is set iff `n` is in the set. A `BitField` is a value: copying it
/// copies the whole set and two fields are equal iff their words are equal.
/// Methods that change membership return a new field instead of modifying
/// the receiver.
///
/// Methods taking a single bit position panic if it is `>= 64`. The
/// constructors [`of`] and [`range`] ignore out-of-range positions instead.
///
/// [`of`]: BitField::of
/// [`range`]: BitField::range
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct BitField(pub(crate) u64);

impl BitField {
    /// The field with no bits set.
    pub const EMPTY: Self = Self(0);

    /// The field with all 64 bits set.
    pub const FULL: Self = Self(!0);

    /// Wraps a raw word, bit `n` of `word` becoming position `n`.
    ///
    /// # Examples
    /// ```
    /// use bitfield64::BitField;
    ///
    /// assert_eq!(BitField::from_word(0b1010), BitField::of(&[1, 3]));
    /// ```
    #[inline]
    pub const fn from_word(word: u64) -> Self {
        Self(word)
    }

    /// Returns the underlying word.
    #[inline]
    pub const fn word(self) -> u64 {
        self.0
    }

    /// Creates a field with exactly the given positions set.
    ///
    /// Positions outside `0..=63` are ignored, repeated positions are set
    /// once.
    ///
    /// # Examples
    /// ```
    /// use bitfield64::BitField;
    ///
    /// let field = BitField::of(&[5, 1, -3, 64, 1]);
    /// assert_eq!(field, BitField::EMPTY.set(1).set(5));
    ///
    /// const SLOTS: BitField = BitField::of(&[0, 63]);
    /// assert_eq!(SLOTS.count(), 2);
    /// ```
    pub const fn of(positions: &[isize]) -> Self {
        let mut word = 0;
        let mut i = 0;
        while i < positions.len() {
            let n = positions[i];
            if n >= 0 && n < WIDTH as isize {
                word |= mask(n as usize);
            }
            i += 1;
        }
        Self(word)
    }

    /// Creates a field with every `step`th position of `low..=high` set,
    /// starting at `low`.
    ///
    /// `low` is raised to 0 and `high` lowered to 63 before stepping. The
    /// result is empty if `low > high` after clamping.
    ///
    /// # Panics
    /// Panics if `step == 0`.
    ///
    /// # Examples
    /// ```
    /// use bitfield64::BitField;
    ///
    /// assert_eq!(BitField::range(0, 9, 3), BitField::of(&[0, 3, 6, 9]));
    /// assert_eq!(BitField::range(-10, 100, 1), BitField::FULL);
    /// assert_eq!(BitField::range(60, 61, 1).to_string(), "60 61");
    /// assert!(BitField::range(7, 2, 1).is_empty());
    /// ```
    pub const fn range(low: isize, high: isize, step: usize) -> Self {
        assert!(step > 0, "step must be greater than zero");
        let low = if low < 0 { 0 } else { low };
        let high = if high > WIDTH as isize - 1 {
            WIDTH as isize - 1
        } else {
            high
        };
        if low > high {
            return Self::EMPTY;
        }

        let high = high as usize;
        let mut word = 0;
        let mut n = low as usize;
        while n <= high {
            word |= mask(n);
            n = match n.checked_add(step) {
                Some(next) => next,
                None => break,
            };
        }
        Self(word)
    }

    /// Returns a copy of the field with bit `n` set.
    ///
    /// # Panics
    /// Panics if `n >= 64`.
    ///
    /// # Examples
    /// ```
    /// use bitfield64::BitField;
    ///
    /// let empty = BitField::EMPTY;
    /// let field = empty.set(3);
    /// assert!(field.test(3));
    /// assert!(!empty.test(3));
    /// ```
    #[must_use = "`set` returns a new field and leaves the receiver unchanged"]
    #[inline]
    pub fn set(self, n: usize) -> Self {
        assert_in_bounds(n);
        Self(self.0 | mask(n))
    }

    /// Returns a copy of the field with bit `n` cleared.
    ///
    /// # Panics
    /// Panics if `n >= 64`.
    ///
    /// # Examples
    /// ```
    /// use bitfield64::BitField;
    ///
    /// let field = BitField::of(&[3, 4]).unset(3);
    /// assert!(!field.test(3));
    /// assert!(field.test(4));
    /// ```
    #[must_use = "`unset` returns a new field and leaves the receiver unchanged"]
    #[inline]
    pub fn unset(self, n: usize) -> Self {
        assert_in_bounds(n);
        Self(self.0 & !mask(n))
    }

    /// Returns `true` if bit `n` is set.
    ///
    /// # Panics
    /// Panics if `n >= 64`.
    #[inline]
    pub fn test(self, n: usize) -> bool {
        assert_in_bounds(n);
        self.0 & mask(n) != 0
    }

    /// Returns `true` if no bit is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits, between 0 and 64.
    ///
    /// # Examples
    /// ```
    /// use bitfield64::BitField;
    ///
    /// assert_eq!(BitField::EMPTY.count(), 0);
    /// assert_eq!(BitField::of(&[2, 4, 5]).count(), 3);
    /// assert_eq!(BitField::FULL.count(), 64);
    /// ```
    #[inline]
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if exactly one bit is set.
    ///
    /// # Examples
    /// ```
    /// use bitfield64::BitField;
    ///
    /// assert!(!BitField::EMPTY.is_singular());
    /// assert!(BitField::of(&[43]).is_singular());
    /// assert!(!BitField::of(&[41, 43]).is_singular());
    /// ```
    #[inline]
    pub const fn is_singular(self) -> bool {
        // clearing the lowest set bit leaves nothing behind
        self.0 != 0 && self.0 & (self.0 - 1) == 0
    }

    /// Returns the lowest set position, or `None` if the field is empty.
    ///
    /// # Examples
    /// ```
    /// use bitfield64::BitField;
    ///
    /// assert_eq!(BitField::EMPTY.least(), None);
    /// assert_eq!(BitField::of(&[41, 43]).least(), Some(41));
    /// ```
    #[inline]
    pub const fn least(self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        Some(self.0.trailing_zeros() as usize)
    }

    /// Returns the highest set position, or `None` if the field is empty.
    ///
    /// # Examples
    /// ```
    /// use bitfield64::BitField;
    ///
    /// assert_eq!(BitField::EMPTY.most(), None);
    /// assert_eq!(BitField::of(&[41, 43]).most(), Some(43));
    /// ```
    #[inline]
    pub const fn most(self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        Some(WIDTH - 1 - self.0.leading_zeros() as usize)
    }

    /// Returns an iterator over the set positions in ascending order.
    ///
    /// The iterator holds its own copy of the bits, so it is unaffected by
    /// whatever happens to `self` afterwards.
    ///
    /// # Examples
    /// ```
    /// use bitfield64::BitField;
    ///
    /// let mut field = BitField::of(&[12, 0, 5]);
    /// let iter = field.iter();
    /// field = field.unset(5);
    /// assert_eq!(iter.collect::<Vec<_>>(), [0, 5, 12]);
    /// assert_eq!(field.iter().collect::<Vec<_>>(), [0, 12]);
    /// ```
    #[inline]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }

    /// Returns the positions set in either field.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the positions set in both fields.
    #[inline]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the positions set in `self` but not in `other`.
    ///
    /// # Examples
    /// ```
    /// use bitfield64::BitField;
    ///
    /// let a = BitField::of(&[1, 2, 3]);
    /// let b = BitField::of(&[2, 9]);
    /// assert_eq!(a.difference(b), BitField::of(&[1, 3]));
    /// assert_eq!(a - b, a.difference(b));
    /// ```
    #[inline]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the positions set in exactly one of the fields.
    #[inline]
    pub const fn symmetric_difference(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }

    /// Returns the positions not set in `self`.
    #[inline]
    pub const fn complement(self) -> Self {
        Self(!self.0)
    }

    /// Returns `true` if every position set in `self` is also set in `other`.
    #[inline]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }
}

impl From<u64> for BitField {
    fn from(word: u64) -> Self {
        Self(word)
    }
}

impl From<BitField> for u64 {
    fn from(field: BitField) -> Self {
        field.0
    }
}

/// Writes the set positions in ascending order, separated by single spaces.
///
/// The empty field writes nothing. The output parses back into the same
/// field with [`str::parse`].
///
/// # Examples
/// ```
/// use bitfield64::BitField;
///
/// assert_eq!(BitField::of(&[5, 1, 3]).to_string(), "1 3 5");
/// assert_eq!(BitField::EMPTY.to_string(), "");
/// ```
impl Display for BitField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut positions = self.iter();
        if let Some(first) = positions.next() {
            write!(f, "{first}")?;
            for n in positions {
                write!(f, " {n}")?;
            }
        }
        Ok(())
    }
}

impl Debug for BitField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Binary for BitField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Binary::fmt(&self.0, f)
    }
}

impl IntoIterator for BitField {
    type Item = usize;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &BitField {
    type Item = usize;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects positions into a field.
///
/// # Panics
/// Panics if any position is `>= 64`.
impl FromIterator<usize> for BitField {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::set)
    }
}

/// Adds positions to the field held by this binding.
///
/// # Panics
/// Panics if any position is `>= 64`.
impl Extend<usize> for BitField {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        *self = iter.into_iter().fold(*self, Self::set);
    }
}

impl BitOr for BitField {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for BitField {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for BitField {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl BitAndAssign for BitField {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl BitXor for BitField {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl BitXorAssign for BitField {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = self.symmetric_difference(rhs);
    }
}

impl Sub for BitField {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl SubAssign for BitField {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.difference(rhs);
    }
}

impl Not for BitField {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

/// Iterator over the set positions of a [`BitField`], in ascending order.
///
/// Holds a copy of the bits not yet visited. Once every position has been
/// yielded it keeps returning `None`.
///
/// Returned by [`BitField::iter()`].
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct Iter(u64);

impl Iter {
    /// Returns the positions this iterator has yet to yield.
    ///
    /// # Examples
    /// ```
    /// use bitfield64::BitField;
    ///
    /// let mut iter = BitField::of(&[2, 4, 12]).iter();
    /// assert_eq!(iter.next(), Some(2));
    /// assert_eq!(iter.remaining(), BitField::of(&[4, 12]));
    /// ```
    #[inline]
    pub const fn remaining(&self) -> BitField {
        BitField(self.0)
    }
}

impl Iterator for Iter {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let n = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1; // unset LSB
        Some(n)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Iter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let n = WIDTH - 1 - self.0.leading_zeros() as usize;
        self.0 &= !mask(n);
        Some(n)
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}

impl Debug for Iter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.remaining()).finish()
    }
}
