use bitfield64::BitField;

const ODD: BitField = BitField::range(1, 63, 2);
const LOW: BitField = BitField::of(&[0, 1, 2, 3]);
const BOTH: BitField = ODD.intersection(LOW);
const _: () = assert!(BOTH.count() == 2 && !BOTH.is_singular());

fn main() {
    assert_eq!(BOTH, BitField::of(&[1, 3]));
    assert_eq!(BOTH.least(), Some(1));
    assert_eq!(ODD.most(), Some(63));
}
