/// Decimal digits of π, starting with the leading 3.
pub const PI_DIGITS: &str = concat!(
    "31415926535897932384626433832795028841971693993751",
    "05820974944592307816406286208998628034825342117067",
    "98214808651328230664709384460955058223172535940812",
    "84811174502841027019385211055596446229489549303819",
    "64428810975665933446128475648233786783165271201909",
    "14564856692346034861045432664821339360726024914127",
    "3"
);

pub const LEARN_DEFAULT_COUNT: usize = 100;
pub const LEARN_GROUP_SIZE: usize = 10;

pub fn digit_count() -> usize {
    PI_DIGITS.len()
}

pub fn digit_at(index: usize) -> Option<u8> {
    PI_DIGITS.as_bytes().get(index).map(|b| b - b'0')
}

pub fn prefix(len: usize) -> Vec<u8> {
    PI_DIGITS
        .bytes()
        .take(len)
        .map(|b| b - b'0')
        .collect()
}

/// Digits for the learn screen: the first `count` digits in blocks of ten.
/// `None` or zero falls back to the default count; the count is clamped to the table.
pub fn digit_groups(count: Option<usize>) -> Vec<&'static str> {
    let count = count
        .filter(|&c| c > 0)
        .unwrap_or(LEARN_DEFAULT_COUNT)
        .min(PI_DIGITS.len());

    PI_DIGITS[..count]
        .as_bytes()
        .chunks(LEARN_GROUP_SIZE)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_all_digits() {
        assert!(PI_DIGITS.bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(digit_count(), 301);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(prefix(5), vec![3, 1, 4, 1, 5]);
        assert_eq!(prefix(0), Vec::<u8>::new());
        assert_eq!(prefix(10_000).len(), digit_count());
    }

    #[test]
    fn test_digit_at() {
        assert_eq!(digit_at(0), Some(3));
        assert_eq!(digit_at(2), Some(4));
        assert_eq!(digit_at(digit_count()), None);
    }

    #[test]
    fn test_digit_groups_default_and_clamp() {
        let groups = digit_groups(None);
        assert_eq!(groups.len(), 10);
        assert_eq!(groups[0], "3141592653");

        let groups = digit_groups(Some(15));
        assert_eq!(groups, vec!["3141592653", "58979"]);

        let all: usize = digit_groups(Some(99_999)).iter().map(|g| g.len()).sum();
        assert_eq!(all, digit_count());

        assert_eq!(digit_groups(Some(0)).len(), 10);
    }
}
