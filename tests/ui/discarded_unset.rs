#![deny(unused_must_use)]

use bitfield64::BitField;

fn main() {
    let field = BitField::FULL;
    field.unset(0);
}
