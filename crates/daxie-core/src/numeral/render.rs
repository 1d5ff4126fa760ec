//! Capital-numeral rendering for validated numerals.
//!
//! The integer part is cut into four-digit groups from the right. Each group
//! is spelled with 拾/佰/仟 place words and followed by its tier word (万,
//! 亿). Zero handling:
//!
//! - a run of zeros inside a group collapses to one 零 when a non-zero digit
//!   follows it in the same group, and vanishes otherwise;
//! - a group that starts with zero, or follows an all-zero group, is
//!   preceded by a single 零;
//! - an all-zero group contributes no digits and no tier word.

use super::parse::Numeral;

/// Capital glyphs for the digits 0 through 9.
pub const DIGITS: [char; 10] = ['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖'];

/// Place words within a four-digit group, indexed by position from the right.
pub const PLACES: [&str; 4] = ["", "拾", "佰", "仟"];

/// Tier words, indexed by group position from the right.
pub const TIERS: [&str; 3] = ["", "万", "亿"];

const ZERO: char = DIGITS[0];
const POINT: char = '点';
const YUAN: char = '元';
const JIAO: char = '角';
const FEN: char = '分';
const WHOLE: char = '整';

/// Render the integer digits of a numeral.
pub fn integer(digits: &str) -> String {
    let groups: Vec<&[u8]> = digits.as_bytes().rchunks(4).collect();
    let mut out = String::new();
    let mut after_empty_group = false;

    for (tier, group) in groups.iter().enumerate().rev() {
        if group.iter().all(|&b| b == b'0') {
            after_empty_group |= !out.is_empty();
            continue;
        }
        if !out.is_empty() && (after_empty_group || group[0] == b'0') {
            out.push(ZERO);
        }
        after_empty_group = false;
        push_group(&mut out, group);
        out.push_str(TIERS[tier]);
    }

    if out.is_empty() {
        out.push(ZERO);
    }
    out
}

fn push_group(out: &mut String, group: &[u8]) {
    let mut started = false;
    let mut pending_zero = false;

    for (i, &b) in group.iter().enumerate() {
        let digit = usize::from(b - b'0');
        if digit == 0 {
            pending_zero = started;
            continue;
        }
        if pending_zero {
            out.push(ZERO);
            pending_zero = false;
        }
        started = true;
        out.push(DIGITS[digit]);
        out.push_str(PLACES[group.len() - 1 - i]);
    }
}

/// Render a numeral in plain mode: integer, then 点 and each fractional digit.
pub fn plain(numeral: &Numeral) -> String {
    let mut out = integer(numeral.integer_digits());
    if let Some(fraction) = numeral.fraction_digits() {
        out.push(POINT);
        out.extend(fraction.bytes().map(|b| DIGITS[usize::from(b - b'0')]));
    }
    out
}

/// Render a numeral as an RMB amount with 元/角/分/整 unit words.
pub fn currency(numeral: &Numeral) -> String {
    let (jiao, fen) = numeral.cents();

    if jiao == 0 && fen == 0 {
        let mut out = integer(numeral.integer_digits());
        out.push(YUAN);
        out.push(WHOLE);
        return out;
    }

    let mut out = String::new();
    if !numeral.integer_is_zero() {
        out.push_str(&integer(numeral.integer_digits()));
        out.push(YUAN);
    }
    if jiao == 0 {
        out.push(ZERO);
    } else {
        out.push(DIGITS[jiao]);
        out.push(JIAO);
    }
    if fen != 0 {
        out.push(DIGITS[fen]);
        out.push(FEN);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(digits: &str) -> String {
        integer(digits)
    }

    #[test]
    fn single_group() {
        assert_eq!(int("0"), "零");
        assert_eq!(int("1"), "壹");
        assert_eq!(int("10"), "壹拾");
        assert_eq!(int("100"), "壹佰");
        assert_eq!(int("1000"), "壹仟");
        assert_eq!(int("1008"), "壹仟零捌");
        assert_eq!(int("1080"), "壹仟零捌拾");
        assert_eq!(int("1234"), "壹仟贰佰叁拾肆");
    }

    #[test]
    fn zero_runs_inside_group_collapse() {
        assert_eq!(int("1001"), "壹仟零壹");
        assert_eq!(int("1010"), "壹仟零壹拾");
        assert_eq!(int("101"), "壹佰零壹");
    }

    #[test]
    fn tier_words_follow_nonzero_groups() {
        assert_eq!(int("10000"), "壹万");
        assert_eq!(int("10008"), "壹万零捌");
        assert_eq!(int("108000"), "壹拾万捌仟");
        assert_eq!(int("10000000"), "壹仟万");
        assert_eq!(int("10000800"), "壹仟万零捌佰");
        assert_eq!(int("10008000"), "壹仟万捌仟");
    }

    #[test]
    fn empty_groups_between_tiers() {
        assert_eq!(int("100000000"), "壹亿");
        assert_eq!(int("100000008"), "壹亿零捌");
        assert_eq!(int("100000800"), "壹亿零捌佰");
        assert_eq!(int("100080000"), "壹亿零捌万");
        assert_eq!(int("100080800"), "壹亿零捌万零捌佰");
        assert_eq!(int("100008000"), "壹亿零捌仟");
        assert_eq!(int("10000000000"), "壹佰亿");
    }

    #[test]
    fn zero_runs_across_tier_boundaries() {
        assert_eq!(int("200000300"), "贰亿零叁佰");
        assert_eq!(int("100100100100"), "壹仟零壹亿零壹拾万零壹佰");
        assert_eq!(int("101010101"), "壹亿零壹佰零壹万零壹佰零壹");
    }

    #[test]
    fn largest_value() {
        assert_eq!(int("999999999999"), "玖仟玖佰玖拾玖亿玖仟玖佰玖拾玖万玖仟玖佰玖拾玖");
    }

    #[test]
    fn plain_fraction_renders_each_digit() {
        let n = Numeral::parse("0.01").unwrap();
        assert_eq!(plain(&n), "零点零壹");
        let n = Numeral::parse("12.30").unwrap();
        assert_eq!(plain(&n), "壹拾贰点叁零");
    }

    #[test]
    fn currency_units() {
        let cases = [
            ("0", "零元整"),
            ("0.00", "零元整"),
            ("0.01", "零壹分"),
            ("0.10", "壹角"),
            ("1.01", "壹元零壹分"),
            ("1.10", "壹元壹角"),
            ("1.11", "壹元壹角壹分"),
            ("1.0", "壹元整"),
            ("10000.08", "壹万元零捌分"),
        ];
        for (input, expected) in cases {
            let n = Numeral::parse(input).unwrap();
            assert_eq!(currency(&n), expected, "input {input}");
        }
    }
}
