//! The fixed character set and its output naming convention.

/// Characters rendered by the tool, paired with the base filename each
/// sprite is written under.
///
/// The names are an external asset contract consumed by the HUD renderer
/// and must not change; membership and order are fixed at compile time.
pub const SPRITES: [(char, &str); 11] = [
    ('0', "zero_32b"),
    ('1', "one_32b"),
    ('2', "two_32b"),
    ('3', "three_32b"),
    ('4', "four_32b"),
    ('5', "five_32b"),
    ('6', "six_32b"),
    ('7', "seven_32b"),
    ('8', "eight_32b"),
    ('9', "nine_32b"),
    ('-', "minus_32b"),
];

#[cfg(test)]
mod tests {
    use super::SPRITES;

    #[test]
    fn eleven_unique_basenames() {
        let mut names: Vec<&str> = SPRITES.iter().map(|&(_, name)| name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn digits_in_order_then_minus() {
        for (i, &(ch, _)) in SPRITES[..10].iter().enumerate() {
            assert_eq!(ch, char::from_digit(i as u32, 10).unwrap());
        }
        assert_eq!(SPRITES[10], ('-', "minus_32b"));
    }
}
