use crate::filter::params::StringFilter;
use crate::store::StringRecord;

impl StringFilter {
    /// A record matches when every present field holds.
    pub fn matches(&self, record: &StringRecord) -> bool {
        let props = &record.properties;

        if let Some(want) = self.is_palindrome {
            if props.is_palindrome != want {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if props.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if props.length > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if props.word_count != count {
                return false;
            }
        }
        if let Some(ch) = self.contains_character {
            // Key presence in the frequency map, i.e. the character occurs
            // at least once in the value.
            if !props.character_frequency_map.contains_key(&ch) {
                return false;
            }
        }

        true
    }

    /// Select matching records, preserving the input order.
    pub fn apply(&self, records: Vec<StringRecord>) -> Vec<StringRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StringRecord;

    fn record(value: &str) -> StringRecord {
        StringRecord::create(value.to_string())
    }

    #[test]
    fn filters_are_conjunctive() {
        let filter = StringFilter {
            is_palindrome: Some(true),
            word_count: Some(1),
            ..Default::default()
        };

        assert!(filter.matches(&record("level")));
        // Palindrome but two words
        assert!(!filter.matches(&record("aba aba")));
        // Single word but not a palindrome
        assert!(!filter.matches(&record("hello")));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let filter = StringFilter {
            min_length: Some(3),
            max_length: Some(3),
            ..Default::default()
        };

        assert!(!filter.matches(&record("ab")));
        assert!(filter.matches(&record("abc")));
        assert!(!filter.matches(&record("abcd")));
    }

    #[test]
    fn contains_character_is_case_sensitive() {
        let filter = StringFilter {
            contains_character: Some('a'),
            ..Default::default()
        };

        assert!(filter.matches(&record("banana")));
        assert!(!filter.matches(&record("BANANA")));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = StringFilter::default();
        let records = vec![record("one"), record("two two")];
        assert_eq!(filter.apply(records).len(), 2);
    }

    #[test]
    fn apply_preserves_input_order() {
        let filter = StringFilter {
            word_count: Some(1),
            ..Default::default()
        };
        let records = vec![record("zebra"), record("two words"), record("apple")];
        let out = filter.apply(records);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].value, "zebra");
        assert_eq!(out[1].value, "apple");
    }
}
