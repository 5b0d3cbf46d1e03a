use super::error::{AutomatonError, Result};

/// Rule used when nothing else is chosen
pub const DEFAULT_RULE: u8 = 110;

/// Lookup table for a Wolfram elementary rule.
///
/// Entry `n` holds the output for the neighborhood whose bits read
/// `left, center, right` from most to least significant, so `n = 7` is
/// `(1,1,1)` and is bound to the most significant bit of the rule code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleTable {
    code: u8,
    outputs: [u8; 8],
}

impl RuleTable {
    /// Build the table for a rule code, rejecting anything above 255
    pub fn from_code(code: u32) -> Result<Self> {
        u8::try_from(code)
            .map(Self::from_rule)
            .map_err(|_| AutomatonError::RuleOutOfRange(code))
    }

    /// Build the table for an in-range rule code
    pub const fn from_rule(code: u8) -> Self {
        let mut outputs = [0u8; 8];
        let mut n = 0;
        while n < 8 {
            outputs[n] = (code >> n) & 1;
            n += 1;
        }
        Self { code, outputs }
    }

    /// The rule code this table was built from
    pub const fn code(&self) -> u8 {
        self.code
    }

    /// Output bit for a neighborhood. Inputs are read as bits (non-zero is 1),
    /// so every call hits one of the 8 entries.
    #[inline]
    pub const fn apply(&self, left: u8, center: u8, right: u8) -> u8 {
        self.outputs[Self::neighborhood(left, center, right)]
    }

    /// 3-bit index of a neighborhood
    #[inline]
    pub const fn neighborhood(left: u8, center: u8, right: u8) -> usize {
        ((left != 0) as usize) << 2 | ((center != 0) as usize) << 1 | (right != 0) as usize
    }

    /// Entries in the canonical order, from `(1,1,1)` down to `(0,0,0)`
    pub fn entries(&self) -> impl Iterator<Item = ([u8; 3], u8)> + '_ {
        (0..8).rev().map(|n| {
            let key = [(n >> 2) as u8 & 1, (n >> 1) as u8 & 1, n as u8 & 1];
            (key, self.outputs[n])
        })
    }

    /// Table for the next rule code, wrapping 255 to 0
    pub const fn next(&self) -> Self {
        Self::from_rule(self.code.wrapping_add(1))
    }

    /// Table for the previous rule code, wrapping 0 to 255
    pub const fn previous(&self) -> Self {
        Self::from_rule(self.code.wrapping_sub(1))
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::from_rule(DEFAULT_RULE)
    }
}

impl TryFrom<u32> for RuleTable {
    type Error = AutomatonError;

    fn try_from(code: u32) -> Result<Self> {
        Self::from_code(code)
    }
}

/// Well-known rules for pickers
pub fn named_rules() -> Vec<(&'static str, RuleTable)> {
    vec![
        ("Rule 30", RuleTable::from_rule(30)),
        ("Rule 90", RuleTable::from_rule(90)),
        ("Rule 110", RuleTable::from_rule(110)),
        ("Rule 184", RuleTable::from_rule(184)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_110_table() {
        let rule = RuleTable::from_code(110).unwrap();

        assert_eq!(rule.apply(1, 1, 1), 0);
        assert_eq!(rule.apply(1, 1, 0), 1);
        assert_eq!(rule.apply(1, 0, 1), 1);
        assert_eq!(rule.apply(1, 0, 0), 0);
        assert_eq!(rule.apply(0, 1, 1), 1);
        assert_eq!(rule.apply(0, 1, 0), 1);
        assert_eq!(rule.apply(0, 0, 1), 1);
        assert_eq!(rule.apply(0, 0, 0), 0);
    }

    #[test]
    fn test_entries_follow_binary_string() {
        // 30 = 00011110, read against 111,110,...,000
        let outputs: Vec<u8> = RuleTable::from_rule(30).entries().map(|(_, o)| o).collect();
        assert_eq!(outputs, vec![0, 0, 0, 1, 1, 1, 1, 0]);

        let keys: Vec<[u8; 3]> = RuleTable::from_rule(30).entries().map(|(k, _)| k).collect();
        assert_eq!(keys[0], [1, 1, 1]);
        assert_eq!(keys[3], [1, 0, 0]);
        assert_eq!(keys[7], [0, 0, 0]);
    }

    #[test]
    fn test_every_code_is_total() {
        for code in 0..=255u32 {
            let rule = RuleTable::from_code(code).unwrap();
            let mut rebuilt = 0u32;
            for (n, ([l, c, r], out)) in rule.entries().enumerate() {
                assert!(out <= 1);
                assert_eq!(rule.apply(l, c, r), out);
                rebuilt |= (out as u32) << (7 - n);
            }
            assert_eq!(rebuilt, code);
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            RuleTable::from_code(256),
            Err(AutomatonError::RuleOutOfRange(256))
        );
        assert!(RuleTable::try_from(1000u32).is_err());
    }

    #[test]
    fn test_next_and_previous_wrap() {
        assert_eq!(RuleTable::from_rule(255).next().code(), 0);
        assert_eq!(RuleTable::from_rule(0).previous().code(), 255);
        assert_eq!(RuleTable::default().next().code(), 111);
    }

    #[test]
    fn test_named_rules_are_unique() {
        let codes: Vec<u8> = named_rules().iter().map(|(_, r)| r.code()).collect();
        let mut unique = codes.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(codes.len(), unique.len());
    }
}
